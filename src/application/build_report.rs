use futures::stream::{self, StreamExt};
use tracing::{debug, info};
use crate::domain::*;
use crate::ports::CertProber;
use super::{inspect, Config, ServiceCatalog};

pub struct BuildReportUseCase<P: CertProber> {
    prober: P,
    catalog: ServiceCatalog,
    config: Config,
}

impl<P: CertProber> BuildReportUseCase<P> {
    pub fn new(prober: P, catalog: ServiceCatalog, config: Config) -> Self {
        Self { prober, catalog, config }
    }

    pub async fn execute(&self, targets: &ProbeTargets) -> Report {
        info!(
            primary = targets.primary.as_deref().unwrap_or("-"),
            core = targets.core.as_deref().unwrap_or("-"),
            expected_ca = %targets.expected_ca,
            "probing cluster TLS endpoints"
        );

        let primary_results = match &targets.primary {
            Some(host) => self.probe_role(NodeRole::Primary, host, &targets.expected_ca).await,
            None => Vec::new(),
        };
        let core_results = match &targets.core {
            Some(host) => self.probe_role(NodeRole::Core, host, &targets.expected_ca).await,
            None => Vec::new(),
        };

        let mut summary = Summary::default();
        for result in primary_results.iter().chain(core_results.iter()) {
            summary.record(result.status);
        }

        info!(pass = summary.pass, warn = summary.warn, info = summary.info, skip = summary.skip, "probe complete");

        Report {
            primary_node: targets.primary.clone(),
            core_node: targets.core.clone(),
            expected_ca: targets.expected_ca.clone(),
            primary_results,
            core_results,
            summary,
        }
    }

    // `buffered` yields in input order, so results follow the catalog even
    // when later endpoints answer first.
    async fn probe_role(&self, role: NodeRole, host: &str, expected_ca: &str) -> Vec<EndpointResult> {
        stream::iter(self.catalog.services(role))
            .map(|endpoint| async move {
                let raw = self.prober.probe(host, endpoint.port, self.config.timeout).await;
                let outcome = inspect(raw, expected_ca);
                debug!(%role, host, port = endpoint.port, service = %endpoint.label, status = %outcome.status, message = %outcome.message, "endpoint classified");
                EndpointResult::new(endpoint, outcome)
            })
            .buffered(self.config.concurrency)
            .collect()
            .await
    }
}
