use std::fmt;
use thiserror::Error;

/// How a port revealed that it is open but not speaking TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonTlsSignal {
    /// Peer hung up right after the ClientHello.
    ClosedAfterHello,
    /// Peer answered with something that is not a TLS record.
    WrongRecordVersion,
    /// Transport error text mentioned an embedded null byte.
    BinaryProtocol,
}

impl fmt::Display for NonTlsSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonTlsSignal::ClosedAfterHello => write!(f, "closed after hello"),
            NonTlsSignal::WrongRecordVersion => write!(f, "wrong record version"),
            NonTlsSignal::BinaryProtocol => write!(f, "binary protocol"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("connection timed out")]
    ConnectTimeout,
    #[error("connection refused")]
    ConnectionRefused,
    #[error("port open but not TLS ({0})")]
    NonTlsProtocol(NonTlsSignal),
    #[error("{0}")]
    TlsFailure(String),
    #[error("failed to parse certificate: {0}")]
    CertificateParse(String),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Config,
    Runtime,
    Output,
}

impl ErrorClass {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorClass::Input => 2,
            ErrorClass::Config => 3,
            ErrorClass::Runtime => 4,
            ErrorClass::Output => 5,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ErrorClass::Input => "INPUT",
            ErrorClass::Config => "CONFIG",
            ErrorClass::Runtime => "RUNTIME",
            ErrorClass::Output => "OUTPUT",
        }
    }
}

/// Process-level failure. Probe failures never become one of these.
#[derive(Debug, Error)]
#[error("error[{}]: {message}", .class.tag())]
pub struct CertprobeError {
    pub class: ErrorClass,
    pub message: String,
}

impl CertprobeError {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self { class, message: message.into() }
    }

    pub fn input(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Input, msg) }
    pub fn config(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Config, msg) }
    pub fn runtime(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Runtime, msg) }
    pub fn output(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Output, msg) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_format_carries_class_tag() {
        let err = CertprobeError::input("no hosts given");
        assert_eq!(err.to_string(), "error[INPUT]: no hosts given");
        assert_eq!(err.class.exit_code(), 2);
    }

    #[test]
    fn parse_failures_read_as_generic_errors() {
        let err = ProbeError::CertificateParse("trailing data".into());
        assert_eq!(err.to_string(), "failed to parse certificate: trailing data");
    }
}
