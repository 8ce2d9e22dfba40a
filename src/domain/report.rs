use serde::Serialize;
use super::{DistinguishedName, OutcomeStatus, ProbeOutcome, ServiceEndpoint, ValidityWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointResult {
    pub service: String,
    pub port: u16,
    pub status: OutcomeStatus,
    pub message: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<DistinguishedName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<DistinguishedName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<ValidityWindow>,
}

impl EndpointResult {
    pub fn new(endpoint: &ServiceEndpoint, outcome: ProbeOutcome) -> Self {
        let ProbeOutcome { status, message, certificate } = outcome;
        let (issuer, subject, validity) = match certificate {
            Some(c) => (Some(c.issuer), Some(c.subject), Some(c.validity)),
            None => (None, None, None),
        };
        Self {
            service: endpoint.label.clone(),
            port: endpoint.port,
            status,
            message,
            required: endpoint.required,
            issuer,
            subject,
            validity,
        }
    }

    pub fn has_certificate(&self) -> bool {
        self.issuer.is_some() && self.subject.is_some() && self.validity.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pass: usize,
    pub warn: usize,
    pub info: usize,
    pub skip: usize,
}

impl Summary {
    pub fn record(&mut self, status: OutcomeStatus) {
        match status {
            OutcomeStatus::Pass => self.pass += 1,
            OutcomeStatus::Warn => self.warn += 1,
            OutcomeStatus::Info => self.info += 1,
            OutcomeStatus::Skip => self.skip += 1,
        }
    }

    pub fn count(&self, status: OutcomeStatus) -> usize {
        match status {
            OutcomeStatus::Pass => self.pass,
            OutcomeStatus::Warn => self.warn,
            OutcomeStatus::Info => self.info,
            OutcomeStatus::Skip => self.skip,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.warn + self.info + self.skip
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub primary_node: Option<String>,
    pub core_node: Option<String>,
    pub expected_ca: String,
    pub primary_results: Vec<EndpointResult>,
    pub core_results: Vec<EndpointResult>,
    pub summary: Summary,
}

impl Report {
    pub fn results(&self) -> impl Iterator<Item = &EndpointResult> {
        self.primary_results.iter().chain(self.core_results.iter())
    }

    /// Required endpoints that did not come back PASS.
    pub fn required_findings(&self) -> impl Iterator<Item = &EndpointResult> {
        self.results().filter(|r| r.required && r.status != OutcomeStatus::Pass)
    }
}
