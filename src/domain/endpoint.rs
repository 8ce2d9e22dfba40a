use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Primary,
    Core,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Primary => write!(f, "primary"),
            NodeRole::Core => write!(f, "core"),
        }
    }
}

/// A port expected on a node. `required == false` means absence is a
/// topology detail, not a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub port: u16,
    pub label: String,
    pub required: bool,
}

impl ServiceEndpoint {
    pub fn new(port: u16, label: impl Into<String>, required: bool) -> Self {
        Self { port, label: label.into(), required }
    }
}
