//! Outcome aggregation, live progress, and the final run summary.
mod collector;
mod percentile;
mod types;


pub use collector::{StatsAggregator, StatsCollector};
pub use percentile::{P50, P90, P95, P99, percentile};
pub use types::{ProgressSnapshot, RequestOutcome, Summary};
