use std::sync::Arc;
use std::time::Instant;
use tokio_rustls::TlsConnector;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{ring, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, SignatureScheme};
use tracing::trace;
use crate::application::{classify_failure, ProbeStage};
use crate::domain::{CertprobeError, HandshakeSummary, ProbeError};
use crate::ports::{TlsHandshaker, PeerCertificate, BoxedIoStream};

/// Accepts any certificate and signature so the handshake always reaches the
/// point where the peer's certificate is known. Only for observing.
#[derive(Debug)]
struct ObserveOnlyVerifier {
    provider: Arc<CryptoProvider>,
}

impl ServerCertVerifier for ObserveOnlyVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider.signature_verification_algorithms.supported_schemes()
    }
}

/// Connect-and-observe handshaker. Never reuse its connector for traffic that
/// has to trust the peer.
pub struct ObservingTlsHandshaker {
    connector: TlsConnector,
}

impl ObservingTlsHandshaker {
    pub fn new() -> Result<Self, CertprobeError> {
        let provider = Arc::new(ring::default_provider());
        let config = ClientConfig::builder_with_provider(provider.clone())
            .with_safe_default_protocol_versions()
            .map_err(|e| CertprobeError::config(format!("failed to build TLS client config: {}", e)))?
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(ObserveOnlyVerifier { provider }))
            .with_no_client_auth();
        Ok(Self { connector: TlsConnector::from(Arc::new(config)) })
    }
}

impl TlsHandshaker for ObservingTlsHandshaker {
    async fn observe(&self, stream: BoxedIoStream, host: &str) -> Result<PeerCertificate, ProbeError> {
        let start = Instant::now();
        let server_name = ServerName::try_from(host.to_string())
            .map_err(|_| ProbeError::Other(format!("invalid server name: {}", host)))?;

        let tls_stream = self.connector.connect(server_name, stream).await.map_err(|e| {
            trace!(host, kind = ?e.kind(), error = %e, "handshake failed");
            classify_failure(ProbeStage::Handshake, e.kind(), &e.to_string())
        })?;

        let tls_ms = start.elapsed().as_secs_f64() * 1000.0;
        let (_, conn) = tls_stream.get_ref();

        let version = match conn.protocol_version() {
            Some(rustls::ProtocolVersion::TLSv1_2) => "TLS1.2".to_string(),
            Some(rustls::ProtocolVersion::TLSv1_3) => "TLS1.3".to_string(),
            Some(v) => format!("{:?}", v),
            None => "unknown".to_string(),
        };
        let cipher = conn.negotiated_cipher_suite().map(|cs| format!("{:?}", cs.suite())).unwrap_or_else(|| "unknown".to_string());
        let chain = conn.peer_certificates().unwrap_or_default();
        let leaf_der = chain.first()
            .map(|c| c.as_ref().to_vec())
            .ok_or_else(|| ProbeError::TlsFailure("peer presented no certificate".to_string()))?;

        Ok(PeerCertificate {
            leaf_der,
            tls_ms,
            summary: HandshakeSummary::new(version, cipher, chain.len()),
        })
    }
}
