//! Run orchestration: one deadline, a worker pool, and the stats collector.
mod config;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, MetricsError};
use crate::http::{Executor, RateLimiter, ReqwestExecutor, RequestSpec, Worker, WorkerReport};
use crate::metrics::{ProgressSnapshot, StatsCollector, Summary};
use crate::shutdown::{ShutdownReceiver, shutdown_channel};

pub use config::TestConfig;

/// Outcome channel slots per worker.
const OUTCOME_BUFFER_PER_WORKER: usize = 10;

/// A validated run, ready to start.
pub struct LoadTest {
    config: TestConfig,
    request: Arc<RequestSpec>,
    executor: Arc<dyn Executor>,
    external_shutdown: Option<ShutdownReceiver>,
}

impl LoadTest {
    /// Validates the configuration and builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration or when the client cannot
    /// be built. Nothing has been started in that case.
    pub fn new(config: TestConfig) -> AppResult<Self> {
        let executor = ReqwestExecutor::new(config.request_timeout, config.connect_timeout)?;
        Self::with_executor(config, Arc::new(executor))
    }

    /// Like [`LoadTest::new`] with a caller-supplied executor.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration.
    pub fn with_executor(config: TestConfig, executor: Arc<dyn Executor>) -> AppResult<Self> {
        config.validate()?;
        let request = Arc::new(RequestSpec::from_config(&config)?);
        Ok(Self {
            config,
            request,
            executor,
            external_shutdown: None,
        })
    }

    /// Stops the run early once `shutdown_rx` flips to `true`.
    #[must_use]
    pub fn with_external_shutdown(mut self, shutdown_rx: ShutdownReceiver) -> Self {
        self.external_shutdown = Some(shutdown_rx);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Spawns the run on the current Tokio runtime.
    #[must_use]
    pub fn start(self) -> RunHandle {
        let (progress_tx, progress_rx) = watch::channel(ProgressSnapshot::default());
        let supervisor = tokio::spawn(supervise(self, progress_tx));
        RunHandle {
            progress_rx,
            supervisor,
        }
    }
}

/// A running load test.
#[derive(Debug)]
pub struct RunHandle {
    progress_rx: watch::Receiver<ProgressSnapshot>,
    supervisor: JoinHandle<AppResult<Summary>>,
}

impl RunHandle {
    /// Latest counters; never blocks the run.
    #[must_use]
    pub fn progress(&self) -> ProgressSnapshot {
        *self.progress_rx.borrow()
    }

    #[must_use]
    pub fn subscribe_progress(&self) -> watch::Receiver<ProgressSnapshot> {
        self.progress_rx.clone()
    }

    /// Waits for the deadline, the drain, and the final summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the collector or the run supervisor fails.
    pub async fn wait(self) -> AppResult<Summary> {
        self.supervisor
            .await
            .map_err(|source| AppError::metrics(MetricsError::RunnerFailed { source }))?
    }
}

/// Validates, runs to the deadline, and returns the summary.
///
/// # Errors
///
/// Returns configuration errors before anything starts, or a collector
/// failure afterwards.
pub async fn run(config: TestConfig) -> AppResult<Summary> {
    LoadTest::new(config)?.start().wait().await
}

async fn supervise(
    test: LoadTest,
    progress_tx: watch::Sender<ProgressSnapshot>,
) -> AppResult<Summary> {
    let LoadTest {
        config,
        request,
        executor,
        external_shutdown,
    } = test;
    let concurrency = config.concurrency.get();

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let (outcome_tx, outcome_rx) =
        mpsc::channel(concurrency.saturating_mul(OUTCOME_BUFFER_PER_WORKER));
    let collector = StatsCollector::spawn(outcome_rx, progress_tx);
    let limiter = Arc::new(RateLimiter::new(config.max_rate));

    info!(
        "Starting load test: {} {} with {} workers for {:?}",
        config.method, config.url, concurrency, config.duration
    );

    let start = Instant::now();
    let deadline = tokio::time::sleep(config.duration);
    tokio::pin!(deadline);

    let mut handles = Vec::with_capacity(concurrency);
    for id in 0..concurrency {
        let worker = Worker {
            id,
            executor: Arc::clone(&executor),
            request: Arc::clone(&request),
            limiter: Arc::clone(&limiter),
            outcome_tx: outcome_tx.clone(),
            shutdown_rx: shutdown_rx.clone(),
        };
        handles.push(tokio::spawn(worker.run()));
    }
    drop(outcome_tx);

    let interrupted = tokio::select! {
        () = &mut deadline => false,
        () = external_interrupt(external_shutdown) => true,
    };
    let elapsed = start.elapsed();
    if interrupted {
        info!("Load test interrupted after {:?}", elapsed);
    } else {
        debug!("Deadline reached after {:?}", elapsed);
    }

    shutdown_tx.send_replace(true);
    limiter.stop();

    let totals = join_workers(handles, config.grace_period).await;
    debug!(
        "Workers emitted {} outcomes, discarded {}",
        totals.emitted, totals.discarded
    );

    let mut aggregator = collector.drain().await?;
    let test_duration = if interrupted {
        elapsed.min(config.duration)
    } else {
        config.duration
    };
    Ok(aggregator.finalize(test_duration))
}

async fn external_interrupt(external_shutdown: Option<ShutdownReceiver>) {
    if let Some(mut shutdown_rx) = external_shutdown {
        let fired = shutdown_rx.wait_for(|stop| *stop).await.is_ok();
        if fired {
            return;
        }
    }
    std::future::pending::<()>().await;
}

/// Waits for every worker to acknowledge the stop, bounded by `grace`.
/// Workers still busy after that are left detached; their late outcomes are
/// discarded because the shutdown signal has already fired.
async fn join_workers(handles: Vec<JoinHandle<WorkerReport>>, grace: Duration) -> WorkerReport {
    let grace_deadline = Instant::now()
        .checked_add(grace)
        .unwrap_or_else(Instant::now);
    let mut totals = WorkerReport::default();
    let mut stragglers: usize = 0;

    for handle in handles {
        match tokio::time::timeout_at(grace_deadline, handle).await {
            Ok(Ok(report)) => {
                totals.emitted = totals.emitted.saturating_add(report.emitted);
                totals.discarded = totals.discarded.saturating_add(report.discarded);
            }
            Ok(Err(err)) => warn!("Worker task failed: {}", err),
            Err(_elapsed) => stragglers = stragglers.saturating_add(1),
        }
    }

    if stragglers > 0 {
        warn!(
            "{} workers still busy after {:?} grace period; leaving them detached",
            stragglers, grace
        );
    }
    totals
}
