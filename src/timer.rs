//! Cancellable one-shot timers.
//!
//! DESIGN
//! ======
//! A timer is a Tokio task that sleeps for the delay, then runs a callback.
//! Cancelling aborts the task. Abort alone cannot stop a callback that is
//! already running on another worker, so owners also tag each timer with an
//! epoch and have the callback compare it under their own lock before acting.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a scheduled callback.
///
/// Dropping the handle does not cancel the timer; call [`OneShot::cancel`].
#[derive(Debug)]
pub struct OneShot {
    handle: JoinHandle<()>,
}

impl OneShot {
    /// Run `callback` once after `delay`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { handle }
    }

    /// Abort the timer. No-op if it already fired.
    pub fn cancel(self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
