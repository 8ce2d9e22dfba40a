use crate::domain::{HandshakeSummary, ProbeError};
use super::io::BoxedIoStream;

pub struct PeerCertificate {
    pub leaf_der: Vec<u8>,
    pub tls_ms: f64,
    pub summary: HandshakeSummary,
}

/// Connect-and-observe TLS: completes a handshake to see what the peer
/// presents. Implementations must not be used where the peer has to be
/// trusted.
pub trait TlsHandshaker: Send + Sync {
    fn observe(&self, stream: BoxedIoStream, host: &str) -> impl std::future::Future<Output = Result<PeerCertificate, ProbeError>> + Send;
}
