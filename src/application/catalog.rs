use serde::Deserialize;
use crate::domain::{CertprobeError, NodeRole, ServiceEndpoint};

/// Which service ports are expected on each node role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceCatalog {
    #[serde(default)]
    pub primary: Vec<ServiceEndpoint>,
    #[serde(default)]
    pub core: Vec<ServiceEndpoint>,
}

impl ServiceCatalog {
    pub fn builtin() -> Self {
        Self {
            primary: vec![
                ServiceEndpoint::new(9871, "NameNode HTTPS UI", true),
                ServiceEndpoint::new(8090, "ResourceManager HTTPS UI", true),
                ServiceEndpoint::new(18480, "Spark History Server HTTPS", true),
                ServiceEndpoint::new(8480, "JournalNode HTTPS", false),
                ServiceEndpoint::new(19890, "Job History Server HTTPS", false),
            ],
            core: vec![
                ServiceEndpoint::new(9865, "DataNode HTTPS", true),
                ServiceEndpoint::new(8044, "NodeManager HTTPS UI", false),
            ],
        }
    }

    pub fn from_json(input: &str) -> Result<Self, CertprobeError> {
        serde_json::from_str(input).map_err(|e| CertprobeError::config(format!("invalid service catalog: {}", e)))
    }

    pub fn services(&self, role: NodeRole) -> &[ServiceEndpoint] {
        match role {
            NodeRole::Primary => &self.primary,
            NodeRole::Core => &self.core,
        }
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
