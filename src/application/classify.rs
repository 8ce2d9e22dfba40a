use crate::domain::{NonTlsSignal, ObservedCertificate, OutcomeStatus, ProbeError, ProbeOutcome, truncate_detail};
use super::parse_certificate;

/// Parses whatever the prober returned and classifies it.
pub fn inspect(raw: Result<Vec<u8>, ProbeError>, expected_ca: &str) -> ProbeOutcome {
    classify(raw.and_then(|der| parse_certificate(&der)), expected_ca)
}

pub fn classify(probe: Result<ObservedCertificate, ProbeError>, expected_ca: &str) -> ProbeOutcome {
    match probe {
        Ok(cert) => classify_certificate(cert, expected_ca),
        Err(err) => classify_error(&err),
    }
}

fn classify_certificate(cert: ObservedCertificate, expected_ca: &str) -> ProbeOutcome {
    let (status, message) = if expected_ca.is_empty() {
        (OutcomeStatus::Pass, "TLS enabled")
    } else if cert.issuer_cn().contains(expected_ca) {
        (OutcomeStatus::Pass, "Custom CA certificate verified")
    } else {
        (OutcomeStatus::Warn, "TLS enabled but different CA")
    };
    ProbeOutcome::with_certificate(status, message, cert)
}

fn classify_error(err: &ProbeError) -> ProbeOutcome {
    match err {
        ProbeError::ConnectTimeout => ProbeOutcome::without_certificate(OutcomeStatus::Skip, "Connection timeout - service may not be running"),
        ProbeError::ConnectionRefused => ProbeOutcome::without_certificate(OutcomeStatus::Skip, "Service not running on this port"),
        ProbeError::NonTlsProtocol(signal) => {
            let message = match signal {
                NonTlsSignal::ClosedAfterHello => "Port open but not TLS (uses RPC/binary protocol)",
                NonTlsSignal::WrongRecordVersion => "Port open but not TLS-enabled",
                NonTlsSignal::BinaryProtocol => "Port open but uses binary protocol (not TLS)",
            };
            ProbeOutcome::without_certificate(OutcomeStatus::Info, message)
        }
        ProbeError::TlsFailure(detail) => {
            ProbeOutcome::without_certificate(OutcomeStatus::Skip, format!("SSL error: {}", truncate_detail(detail)))
        }
        ProbeError::CertificateParse(_) | ProbeError::Other(_) => {
            ProbeOutcome::without_certificate(OutcomeStatus::Skip, format!("Error: {}", truncate_detail(&err.to_string())))
        }
    }
}
