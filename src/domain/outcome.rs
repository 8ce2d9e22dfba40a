use std::fmt;
use serde::Serialize;
use super::ObservedCertificate;

/// Longest slice of a library error message that makes it into a report.
pub const ERROR_DETAIL_LIMIT: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutcomeStatus {
    Pass,
    Warn,
    Info,
    Skip,
}

impl OutcomeStatus {
    pub const ALL: [OutcomeStatus; 4] = [OutcomeStatus::Pass, OutcomeStatus::Warn, OutcomeStatus::Info, OutcomeStatus::Skip];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Pass => "PASS",
            OutcomeStatus::Warn => "WARN",
            OutcomeStatus::Info => "INFO",
            OutcomeStatus::Skip => "SKIP",
        }
    }

    /// Lowercase summary key.
    pub fn key(&self) -> &'static str {
        match self {
            OutcomeStatus::Pass => "pass",
            OutcomeStatus::Warn => "warn",
            OutcomeStatus::Info => "info",
            OutcomeStatus::Skip => "skip",
        }
    }

    pub fn observed_certificate(&self) -> bool {
        matches!(self, OutcomeStatus::Pass | OutcomeStatus::Warn)
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: OutcomeStatus,
    pub message: String,
    pub certificate: Option<ObservedCertificate>,
}

impl ProbeOutcome {
    pub fn without_certificate(status: OutcomeStatus, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), certificate: None }
    }

    pub fn with_certificate(status: OutcomeStatus, message: impl Into<String>, certificate: ObservedCertificate) -> Self {
        Self { status, message: message.into(), certificate: Some(certificate) }
    }
}

/// Cuts `detail` to `ERROR_DETAIL_LIMIT` characters on a char boundary.
pub fn truncate_detail(detail: &str) -> &str {
    match detail.char_indices().nth(ERROR_DETAIL_LIMIT) {
        Some((idx, _)) => &detail[..idx],
        None => detail,
    }
}
