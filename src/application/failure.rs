use std::io::ErrorKind;
use crate::domain::{NonTlsSignal, ProbeError};

/// Where in the probe an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    Resolve,
    Connect,
    Handshake,
}

/// Maps a low-level I/O or TLS error onto the probe failure taxonomy.
///
/// All matching on error text lives here. The phrases are tied to what
/// rustls and tokio-rustls report today.
pub fn classify_failure(stage: ProbeStage, kind: ErrorKind, detail: &str) -> ProbeError {
    match kind {
        ErrorKind::TimedOut => return ProbeError::ConnectTimeout,
        ErrorKind::ConnectionRefused => return ProbeError::ConnectionRefused,
        _ => {}
    }

    let lowered = detail.to_ascii_lowercase();

    if stage == ProbeStage::Handshake {
        if kind == ErrorKind::UnexpectedEof || lowered.contains("tls handshake eof") || lowered.contains("unexpected eof") {
            return ProbeError::NonTlsProtocol(NonTlsSignal::ClosedAfterHello);
        }
        if is_wrong_record_version(&lowered) {
            return ProbeError::NonTlsProtocol(NonTlsSignal::WrongRecordVersion);
        }
        if kind == ErrorKind::InvalidData || kind == ErrorKind::InvalidInput {
            return ProbeError::TlsFailure(detail.to_string());
        }
    }

    if lowered.contains("null byte") || lowered.contains("nul byte") {
        return ProbeError::NonTlsProtocol(NonTlsSignal::BinaryProtocol);
    }

    ProbeError::Other(detail.to_string())
}

fn is_wrong_record_version(lowered: &str) -> bool {
    ["wrong_version", "wrong version", "invalidcontenttype", "unknownprotocolversion"]
        .iter()
        .any(|needle| lowered.contains(needle))
}
