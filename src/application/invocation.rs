use serde::Deserialize;
use crate::domain::{CertprobeError, ProbeTargets};

/// The event record the probe is invoked with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub primary_dns: Option<String>,
    #[serde(default)]
    pub core_dns: Option<String>,
    #[serde(default)]
    pub expected_ca: Option<String>,
}

impl Invocation {
    pub fn from_json(input: &str) -> Result<Self, CertprobeError> {
        serde_json::from_str(input).map_err(|e| CertprobeError::input(format!("invalid invocation record: {}", e)))
    }

    /// Fields set in `other` take precedence.
    pub fn merge(self, other: Invocation) -> Self {
        Self {
            primary_dns: other.primary_dns.or(self.primary_dns),
            core_dns: other.core_dns.or(self.core_dns),
            expected_ca: other.expected_ca.or(self.expected_ca),
        }
    }

    pub fn into_targets(self) -> ProbeTargets {
        ProbeTargets::new(self.primary_dns, self.core_dns, self.expected_ca.unwrap_or_default())
    }
}
