use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::metrics::RequestOutcome;
use crate::shutdown::{ShutdownReceiver, is_shutdown, wait_for_shutdown};

use super::{Executor, RateLimiter, RequestSpec};

/// Position of a worker in its request loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerState {
    Ready,
    WaitingForToken,
    Executing,
    Emitting(RequestOutcome),
    Stopped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub emitted: u64,
    pub discarded: u64,
}

/// One member of the worker pool. Repeats acquire, execute, emit until the
/// shutdown signal fires, the limiter refuses a token, or the outcome channel
/// closes.
pub struct Worker {
    pub id: usize,
    pub executor: Arc<dyn Executor>,
    pub request: Arc<RequestSpec>,
    pub limiter: Arc<RateLimiter>,
    pub outcome_tx: mpsc::Sender<RequestOutcome>,
    pub shutdown_rx: ShutdownReceiver,
}

impl Worker {
    pub async fn run(self) -> WorkerReport {
        let Worker {
            id,
            executor,
            request,
            limiter,
            outcome_tx,
            mut shutdown_rx,
        } = self;
        let mut report = WorkerReport::default();
        let mut state = WorkerState::Ready;

        loop {
            state = match state {
                WorkerState::Ready => {
                    if is_shutdown(&shutdown_rx) {
                        WorkerState::Stopped
                    } else {
                        WorkerState::WaitingForToken
                    }
                }
                WorkerState::WaitingForToken => {
                    if limiter.acquire(&mut shutdown_rx).await {
                        WorkerState::Executing
                    } else {
                        WorkerState::Stopped
                    }
                }
                WorkerState::Executing => {
                    // In-flight requests run to completion; shutdown is
                    // checked again before the outcome is handed off.
                    let result = executor.execute(&request).await;
                    WorkerState::Emitting(result.into())
                }
                WorkerState::Emitting(outcome) => {
                    emit(&outcome_tx, &mut shutdown_rx, outcome, &mut report).await
                }
                WorkerState::Stopped => break,
            };
            trace!("worker {} -> {:?}", id, state);
        }

        debug!(
            "Worker {} stopped: {} emitted, {} discarded",
            id, report.emitted, report.discarded
        );
        report
    }
}

async fn emit(
    outcome_tx: &mpsc::Sender<RequestOutcome>,
    shutdown_rx: &mut ShutdownReceiver,
    outcome: RequestOutcome,
    report: &mut WorkerReport,
) -> WorkerState {
    if is_shutdown(shutdown_rx) {
        report.discarded = report.discarded.saturating_add(1);
        return WorkerState::Stopped;
    }

    tokio::select! {
        biased;
        () = wait_for_shutdown(shutdown_rx) => {
            report.discarded = report.discarded.saturating_add(1);
            WorkerState::Stopped
        }
        sent = outcome_tx.send(outcome) => match sent {
            Ok(()) => {
                report.emitted = report.emitted.saturating_add(1);
                WorkerState::Ready
            }
            Err(_closed) => WorkerState::Stopped,
        },
    }
}
