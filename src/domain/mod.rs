mod report;
mod outcome;
mod endpoint;
mod tls;
mod cert;
mod target;
mod error;

pub use report::{EndpointResult, Report, Summary};
pub use outcome::{OutcomeStatus, ProbeOutcome, truncate_detail, ERROR_DETAIL_LIMIT};
pub use endpoint::{NodeRole, ServiceEndpoint};
pub use tls::HandshakeSummary;
pub use cert::{DistinguishedName, NameAttribute, ObservedCertificate, ValidityWindow};
pub use target::{ProbeTargets, CORE_ABSENT_SENTINEL};
pub use error::{CertprobeError, ErrorClass, NonTlsSignal, ProbeError};
