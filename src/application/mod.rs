mod build_report;
mod probe_certificate;
mod catalog;
mod cert_parser;
mod classify;
mod failure;
mod invocation;
mod config;

pub use build_report::BuildReportUseCase;
pub use probe_certificate::ProbeCertificateUseCase;
pub use catalog::ServiceCatalog;
pub use cert_parser::parse_certificate;
pub use classify::{classify, inspect};
pub use failure::{classify_failure, ProbeStage};
pub use invocation::Invocation;
pub use config::{Config, parse_duration};
