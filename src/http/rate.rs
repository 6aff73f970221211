use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::shutdown::{ShutdownReceiver, is_shutdown, wait_for_shutdown};

/// Shared gate bounding the aggregate request rate of all workers.
///
/// With a rate of `R` the bucket holds at most `R` tokens, starts full, and a
/// background task adds one token every `1/R` seconds. Without a rate the
/// gate never blocks.
#[derive(Debug)]
pub struct RateLimiter {
    bucket: Option<TokenBucket>,
}

#[derive(Debug)]
struct TokenBucket {
    tokens: Arc<Semaphore>,
    refill: JoinHandle<()>,
}

impl RateLimiter {
    /// `None` or `Some(0)` builds an unlimited gate. A limited gate spawns its
    /// refill task, so it must be created inside a Tokio runtime.
    #[must_use]
    pub fn new(max_rate: Option<u32>) -> Self {
        let Some(rate) = max_rate.filter(|rate| *rate > 0) else {
            return Self::unlimited();
        };

        let capacity = usize::try_from(rate).unwrap_or(usize::MAX);
        let tokens = Arc::new(Semaphore::new(capacity));
        let period = Duration::from_secs(1)
            .checked_div(rate)
            .unwrap_or(Duration::from_secs(1))
            .max(Duration::from_nanos(1));
        let refill = spawn_refill(Arc::clone(&tokens), capacity, period);
        tracing::debug!("Rate limiter started at {} req/s", rate);

        Self {
            bucket: Some(TokenBucket { tokens, refill }),
        }
    }

    #[must_use]
    pub const fn unlimited() -> Self {
        Self { bucket: None }
    }

    #[must_use]
    pub const fn is_limited(&self) -> bool {
        self.bucket.is_some()
    }

    /// Waits for one token. Returns `false` once shutdown is signalled or the
    /// limiter has been stopped; the caller must stop rather than retry.
    pub async fn acquire(&self, shutdown_rx: &mut ShutdownReceiver) -> bool {
        if is_shutdown(shutdown_rx) {
            return false;
        }
        let Some(bucket) = self.bucket.as_ref() else {
            return true;
        };

        tokio::select! {
            biased;
            () = wait_for_shutdown(shutdown_rx) => false,
            permit = bucket.tokens.acquire() => match permit {
                Ok(permit) => {
                    permit.forget();
                    true
                }
                Err(_closed) => false,
            },
        }
    }

    /// Ends the refill task and fails every pending and future `acquire`.
    /// Safe to call more than once.
    pub fn stop(&self) {
        if let Some(bucket) = self.bucket.as_ref() {
            if !bucket.tokens.is_closed() {
                tracing::debug!("Rate limiter stopped");
            }
            bucket.tokens.close();
            bucket.refill.abort();
        }
    }
}

impl Drop for RateLimiter {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_refill(tokens: Arc<Semaphore>, capacity: usize, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut refill_tick = interval(period);
        refill_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The bucket starts full; skip the immediate first tick.
        refill_tick.tick().await;
        loop {
            refill_tick.tick().await;
            if tokens.is_closed() {
                break;
            }
            if tokens.available_permits() < capacity {
                tokens.add_permits(1);
            }
        }
    })
}
