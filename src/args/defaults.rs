use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("g0-loadtest/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_CONCURRENCY: &str = "10";
pub(crate) const DEFAULT_DURATION: &str = "10s";
pub(crate) const DEFAULT_TIMEOUT: &str = "10s";
pub(crate) const DEFAULT_CONNECT: &str = "5s";
pub(crate) const DEFAULT_GRACE: &str = "50ms";

/// Per-request timeout applied by the HTTP executor.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Connection establishment timeout applied by the HTTP executor.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// How long the runner waits for workers to acknowledge shutdown before draining.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(50);
