use std::collections::BTreeMap;
use std::time::Duration;

/// Result of one request attempt as seen by the aggregator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOutcome {
    pub latency: Duration,
    /// `0` when the attempt failed before a status line was received.
    pub status_code: u16,
    pub error: Option<String>,
}

impl RequestOutcome {
    /// No error and a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..=299).contains(&self.status_code)
    }
}

/// Counter copy handed to progress readers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Divisor used for `requests_per_sec`.
    pub duration: Duration,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub requests_per_sec: f64,
    pub min_latency: Duration,
    pub avg_latency: Duration,
    pub max_latency: Duration,
    pub p50_latency: Duration,
    pub p90_latency: Duration,
    pub p95_latency: Duration,
    pub p99_latency: Duration,
    pub status_counts: BTreeMap<u16, u64>,
}
