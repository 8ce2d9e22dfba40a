use crate::domain::{CertprobeError, Report};

pub trait Renderer: Send + Sync {
    fn render(&self, report: &Report) -> Result<String, CertprobeError>;
}
