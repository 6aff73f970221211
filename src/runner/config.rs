use std::collections::BTreeMap;
use std::time::Duration;

use crate::args::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_GRACE_PERIOD, DEFAULT_REQUEST_TIMEOUT, HttpMethod,
    PositiveUsize,
};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{build_header_map, parse_target_url};

/// Everything a run needs. Read-only once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    pub url: String,
    pub method: HttpMethod,
    pub body: String,
    /// Keys are unique and sent as supplied.
    pub headers: BTreeMap<String, String>,
    pub concurrency: PositiveUsize,
    pub duration: Duration,
    /// Requests per second across all workers; `None` means unlimited.
    pub max_rate: Option<u32>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Upper bound on waiting for workers after the deadline.
    pub grace_period: Duration,
}

impl TestConfig {
    /// A GET run with default timeouts.
    #[must_use]
    pub fn new(url: impl Into<String>, concurrency: PositiveUsize, duration: Duration) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            body: String::new(),
            headers: BTreeMap::new(),
            concurrency,
            duration,
            max_rate: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    /// # Errors
    ///
    /// Returns an error for a zero duration, an unusable URL, or a header that
    /// is not valid HTTP.
    pub fn validate(&self) -> AppResult<()> {
        if self.duration.is_zero() {
            return Err(AppError::validation(ValidationError::DurationZero));
        }
        parse_target_url(&self.url)?;
        build_header_map(&self.headers)?;
        Ok(())
    }
}
