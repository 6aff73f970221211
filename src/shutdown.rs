//! Run-wide cancellation signal.
//!
//! A `watch` channel carrying `true` once the run must stop. Unlike a
//! broadcast channel, receivers created after the signal fired still observe
//! it, and dropping every sender also counts as shutdown.

use tokio::sync::watch;

pub type ShutdownSender = watch::Sender<bool>;
pub type ShutdownReceiver = watch::Receiver<bool>;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    watch::channel(false)
}

/// Non-blocking check of the current signal value.
#[must_use]
pub fn is_shutdown(rx: &ShutdownReceiver) -> bool {
    *rx.borrow()
}

/// Resolves once shutdown is signalled or every sender is gone.
pub async fn wait_for_shutdown(rx: &mut ShutdownReceiver) {
    drop(rx.wait_for(|stop| *stop).await);
}
