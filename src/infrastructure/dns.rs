use std::net::IpAddr;
use hickory_resolver::TokioAsyncResolver;
use crate::application::{classify_failure, ProbeStage};
use crate::domain::{CertprobeError, ProbeError};
use crate::ports::DnsResolver;

pub struct HickoryDnsResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryDnsResolver {
    /// Uses the host's resolver configuration so cluster-internal names resolve.
    pub fn new() -> Result<Self, CertprobeError> {
        let resolver = TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| CertprobeError::config(format!("failed to load system resolver config: {}", e)))?;
        Ok(Self { resolver })
    }
}

impl DnsResolver for HickoryDnsResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ProbeError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }
        let response = self.resolver.lookup_ip(host).await.map_err(|e| {
            classify_failure(ProbeStage::Resolve, std::io::ErrorKind::Other, &format!("DNS lookup failed for '{}': {}", host, e))
        })?;
        let ips: Vec<IpAddr> = response.iter().collect();
        if ips.is_empty() {
            return Err(ProbeError::Other(format!("no DNS records for '{}'", host)));
        }
        Ok(ips)
    }
}
