//! Request execution, rate limiting, and the per-worker request loop.
mod executor;
mod rate;
mod request;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use executor::{ExecutionResult, Executor, ReqwestExecutor};
pub use rate::RateLimiter;
pub use request::{RequestSpec, build_header_map, parse_target_url};
pub use worker::{Worker, WorkerReport, WorkerState};
