use std::time::Duration;
use crate::domain::ProbeError;

/// Fetches the DER leaf certificate a service presents on `host:port`.
pub trait CertProber: Send + Sync {
    fn probe(&self, host: &str, port: u16, timeout: Duration) -> impl std::future::Future<Output = Result<Vec<u8>, ProbeError>> + Send;
}
