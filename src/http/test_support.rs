use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{ExecutionResult, Executor, RequestSpec};

/// Executor that sleeps for a fixed latency and answers from a script.
///
/// `failures_every` turns every n-th call into a transport failure
/// (status 0 with an error).
#[derive(Debug)]
pub(crate) struct FakeExecutor {
    latency: Duration,
    status_code: u16,
    failures_every: Option<u64>,
    panic_on: Option<u64>,
    calls: AtomicU64,
}

impl FakeExecutor {
    pub(crate) const fn new(latency: Duration, status_code: u16) -> Self {
        Self {
            latency,
            status_code,
            failures_every: None,
            panic_on: None,
            calls: AtomicU64::new(0),
        }
    }

    pub(crate) const fn failing_every(mut self, every: u64) -> Self {
        self.failures_every = Some(every);
        self
    }

    /// Panics inside the `call`-th execution, counting from 1.
    pub(crate) const fn panicking_on(mut self, call: u64) -> Self {
        self.panic_on = Some(call);
        self
    }

    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Executor for FakeExecutor {
    async fn execute(&self, _request: &RequestSpec) -> ExecutionResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        tokio::time::sleep(self.latency).await;
        if self.panic_on == Some(call) {
            fail_worker(call);
        }

        let failed = self
            .failures_every
            .and_then(|every| call.checked_rem(every))
            .is_some_and(|rem| rem == 0);
        if failed {
            ExecutionResult {
                latency: self.latency,
                status_code: 0,
                error: Some("connection refused".to_owned()),
            }
        } else {
            ExecutionResult {
                latency: self.latency,
                status_code: self.status_code,
                error: None,
            }
        }
    }
}

#[expect(clippy::panic, reason = "simulates a crashing worker task")]
fn fail_worker(call: u64) {
    panic!("fake executor crashed on call {}", call);
}
