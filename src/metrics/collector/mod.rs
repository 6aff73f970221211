mod state;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult, MetricsError};

use super::{ProgressSnapshot, RequestOutcome};
pub use state::StatsAggregator;

/// Handle to the spawned aggregator task, the single consumer of the
/// outcome channel.
#[derive(Debug)]
pub struct StatsCollector {
    handle: JoinHandle<StatsAggregator>,
    drain_tx: oneshot::Sender<()>,
}

impl StatsCollector {
    /// Spawns the collector. A fresh [`ProgressSnapshot`] is published after
    /// every processed outcome.
    #[must_use]
    pub fn spawn(
        outcome_rx: mpsc::Receiver<RequestOutcome>,
        progress_tx: watch::Sender<ProgressSnapshot>,
    ) -> Self {
        let (drain_tx, drain_rx) = oneshot::channel();
        let handle = tokio::spawn(collect_outcomes(outcome_rx, drain_rx, progress_tx));
        Self { handle, drain_tx }
    }

    /// Closes the channel, consumes everything still buffered, and returns
    /// the aggregator.
    ///
    /// # Errors
    ///
    /// Returns an error if the collector task panicked or was cancelled.
    pub async fn drain(self) -> AppResult<StatsAggregator> {
        if self.drain_tx.send(()).is_err() {
            tracing::debug!("Collector already stopped before drain");
        }
        self.handle
            .await
            .map_err(|source| AppError::metrics(MetricsError::AggregatorFailed { source }))
    }
}

async fn collect_outcomes(
    mut outcome_rx: mpsc::Receiver<RequestOutcome>,
    mut drain_rx: oneshot::Receiver<()>,
    progress_tx: watch::Sender<ProgressSnapshot>,
) -> StatsAggregator {
    let mut aggregator = StatsAggregator::new();

    loop {
        tokio::select! {
            biased;
            maybe_outcome = outcome_rx.recv() => {
                let Some(outcome) = maybe_outcome else {
                    break;
                };
                aggregator.add_outcome(outcome);
                progress_tx.send_replace(aggregator.progress_snapshot());
            }
            _ = &mut drain_rx => break,
        }
    }

    outcome_rx.close();
    let mut drained: u64 = 0;
    while let Some(outcome) = outcome_rx.recv().await {
        aggregator.add_outcome(outcome);
        drained = drained.saturating_add(1);
    }
    progress_tx.send_replace(aggregator.progress_snapshot());

    tracing::debug!(
        "Collector stopped after {} outcomes ({} drained after close)",
        aggregator.progress_snapshot().total_requests,
        drained
    );
    aggregator
}
