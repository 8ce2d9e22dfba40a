use std::time::{Duration, Instant};
use crate::domain::ProbeError;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    /// Expiry surfaces as `ProbeError::ConnectTimeout`.
    fn timeout<F, T>(&self, duration: Duration, future: F) -> impl std::future::Future<Output = Result<T, ProbeError>> + Send
    where
        F: std::future::Future<Output = T> + Send,
        T: Send;
}
