/// Hosts to probe, after the invocation record has been normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeTargets {
    pub primary: Option<String>,
    pub core: Option<String>,
    pub expected_ca: String,
}

impl ProbeTargets {
    pub fn new(primary: Option<String>, core: Option<String>, expected_ca: impl Into<String>) -> Self {
        Self {
            primary: normalize_host(primary),
            core: normalize_host(core).filter(|h| h != CORE_ABSENT_SENTINEL),
            expected_ca: expected_ca.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.core.is_none()
    }
}

/// Placeholder some deployments pass for clusters without core nodes.
pub const CORE_ABSENT_SENTINEL: &str = "None";

fn normalize_host(host: Option<String>) -> Option<String> {
    host.map(|h| h.trim().to_string()).filter(|h| !h.is_empty())
}
