use std::collections::BTreeMap;
use std::time::Duration;

use super::super::percentile::{P50, P90, P95, P99, duration_from_nanos, percentile};
use super::super::{ProgressSnapshot, RequestOutcome, Summary};

#[derive(Debug, Default)]
struct RunningStats {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    min_latency: Option<Duration>,
    max_latency: Duration,
    latency_sum_nanos: u128,
    latencies: Vec<Duration>,
    status_counts: BTreeMap<u16, u64>,
}

/// Single-owner accumulator of request outcomes.
///
/// Lives inside the collector task; other tasks only see
/// [`ProgressSnapshot`] copies or the final [`Summary`].
#[derive(Debug, Default)]
pub struct StatsAggregator {
    stats: RunningStats,
    finalized: Option<Summary>,
}

impl StatsAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_outcome(&mut self, outcome: RequestOutcome) {
        let stats = &mut self.stats;
        stats.total_requests = stats.total_requests.saturating_add(1);
        if outcome.is_success() {
            stats.successful_requests = stats.successful_requests.saturating_add(1);
        } else {
            stats.failed_requests = stats.failed_requests.saturating_add(1);
        }

        if outcome.status_code != 0 {
            let count = stats.status_counts.entry(outcome.status_code).or_insert(0);
            *count = count.saturating_add(1);
        }

        let latency = outcome.latency;
        stats.min_latency = Some(stats.min_latency.map_or(latency, |min| min.min(latency)));
        stats.max_latency = stats.max_latency.max(latency);
        stats.latency_sum_nanos = stats.latency_sum_nanos.saturating_add(latency.as_nanos());
        stats.latencies.push(latency);
    }

    #[must_use]
    pub const fn progress_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total_requests: self.stats.total_requests,
            successful_requests: self.stats.successful_requests,
            failed_requests: self.stats.failed_requests,
        }
    }

    /// Sorts the latency samples and freezes the summary. Later calls return
    /// the first summary unchanged, whatever duration they pass.
    pub fn finalize(&mut self, test_duration: Duration) -> Summary {
        if let Some(summary) = self.finalized.as_ref() {
            return summary.clone();
        }

        let stats = &mut self.stats;
        stats.latencies.sort_unstable();
        let sorted = stats.latencies.as_slice();

        let avg_latency = stats
            .latency_sum_nanos
            .checked_div(u128::from(stats.total_requests))
            .map_or(Duration::ZERO, duration_from_nanos);

        let summary = Summary {
            duration: test_duration,
            total_requests: stats.total_requests,
            successful_requests: stats.successful_requests,
            failed_requests: stats.failed_requests,
            requests_per_sec: requests_per_sec(stats.total_requests, test_duration),
            min_latency: stats.min_latency.unwrap_or_default(),
            avg_latency,
            max_latency: stats.max_latency,
            p50_latency: percentile(sorted, P50),
            p90_latency: percentile(sorted, P90),
            p95_latency: percentile(sorted, P95),
            p99_latency: percentile(sorted, P99),
            status_counts: stats.status_counts.clone(),
        };

        tracing::debug!(
            "Finalized {} outcomes over {:?}",
            summary.total_requests,
            test_duration
        );
        self.finalized = Some(summary.clone());
        summary
    }

    #[cfg(test)]
    pub(crate) fn sample_count(&self) -> usize {
        self.stats.latencies.len()
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "throughput is reported as a fractional rate"
)]
fn requests_per_sec(total: u64, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs > 0.0 {
        total as f64 / secs
    } else {
        0.0
    }
}
