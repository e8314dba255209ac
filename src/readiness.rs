//! Surface readiness guard: one forced relayout shortly after attach.
//!
//! Surfaces mounted inside hidden tabs or animated containers report a stale
//! or zero size right after attach. The guard schedules a single relayout
//! once the container has had time to settle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::surface::RenderSurface;
use crate::timer::OneShot;

#[derive(Debug, Default)]
struct GuardState {
    pending: Option<OneShot>,
    epoch: u64,
    detached: bool,
}

pub struct SurfaceReadinessGuard {
    surface: Arc<dyn RenderSurface>,
    delay: Duration,
    state: Arc<Mutex<GuardState>>,
}

impl SurfaceReadinessGuard {
    #[must_use]
    pub fn new(surface: Arc<dyn RenderSurface>, delay: Duration) -> Self {
        Self { surface, delay, state: Arc::new(Mutex::new(GuardState::default())) }
    }

    /// Schedule the post-attach relayout.
    ///
    /// Calling this again while a relayout is pending replaces it. Ignored
    /// after [`detach`](Self::detach). Must be called from within a Tokio
    /// runtime.
    pub fn on_attach(&self) {
        let mut state = lock(&self.state);
        if state.detached {
            return;
        }
        state.epoch += 1;
        if let Some(prev) = state.pending.take() {
            prev.cancel();
        }

        let epoch = state.epoch;
        let shared = Arc::clone(&self.state);
        let surface = Arc::clone(&self.surface);
        state.pending = Some(OneShot::spawn(self.delay, move || {
            {
                let mut state = lock(&shared);
                if state.detached || state.epoch != epoch {
                    return;
                }
                state.pending = None;
            }
            surface.force_relayout();
            debug!("surface relayout forced");
        }));
        debug!(delay = ?self.delay, "relayout scheduled");
    }

    /// Cancel the pending relayout. `force_relayout` is never called after
    /// this returns. Idempotent; also run on drop.
    pub fn detach(&self) {
        let mut state = lock(&self.state);
        if state.detached {
            return;
        }
        state.detached = true;
        state.epoch += 1;
        if let Some(timer) = state.pending.take() {
            timer.cancel();
            debug!("pending relayout cancelled");
        }
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        lock(&self.state).pending.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for SurfaceReadinessGuard {
    fn drop(&mut self) {
        self.detach();
    }
}

fn lock(state: &Mutex<GuardState>) -> MutexGuard<'_, GuardState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "readiness_test.rs"]
mod tests;
