//! View sync controller: keeps the map centered on the selected property.
//!
//! DESIGN
//! ======
//! Every distinct focus request arms a short one-shot timer; a newer request
//! cancels the armed timer first, so rapid selection changes coalesce into a
//! single fly-to for the last one. The delay lets the surface finish any
//! in-flight layout before it is asked to animate.
//!
//! State is owned by the controller behind its own mutex. Each armed timer
//! carries the epoch it was armed in; cancellation and detach bump the epoch,
//! and a timer only acts if its epoch is still current when it takes the lock.
//! The lock is never held across surface calls, so surfaces may call back
//! into the controller from `animate_to`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is propagated to the caller. A surface that is not ready when the
//! timer fires is skipped without retry. A failed fly-to is logged as a
//! warning. In both cases `last_applied` keeps its previous value.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::config::SyncConfig;
use crate::focus::FocusPoint;
use crate::surface::{RenderSurface, SurfaceError};
use crate::timer::OneShot;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Why an armed timer did not apply its focus.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("surface container not ready")]
    NotReady,
    #[error("fly-to {focus} failed: {source}")]
    AnimationFailed {
        focus: FocusPoint,
        #[source]
        source: SurfaceError,
    },
}

impl SyncError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotReady => "E_SURFACE_NOT_READY",
            Self::AnimationFailed { .. } => "E_ANIMATION_FAILED",
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Default)]
struct SyncState {
    /// Focus of the last successful fly-to.
    last_applied: Option<FocusPoint>,
    /// Focus of the most recently armed request, applied or not.
    last_requested: Option<FocusPoint>,
    pending: Option<OneShot>,
    epoch: u64,
    detached: bool,
}

impl SyncState {
    /// Cancel the armed timer, if any, and invalidate it.
    fn cancel_pending(&mut self) -> bool {
        self.epoch += 1;
        match self.pending.take() {
            Some(timer) => {
                timer.cancel();
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct ViewSyncController {
    surface: Arc<dyn RenderSurface>,
    config: SyncConfig,
    state: Arc<Mutex<SyncState>>,
}

impl ViewSyncController {
    /// Attach a controller to `surface`. No timer is armed until the first
    /// focus request.
    #[must_use]
    pub fn attach(surface: Arc<dyn RenderSurface>, config: SyncConfig) -> Self {
        Self { surface, config, state: Arc::new(Mutex::new(SyncState::default())) }
    }

    /// Request that the surface be centered on `new_focus`.
    ///
    /// `None` is ignored. A focus equal to the last applied one is ignored.
    /// Unless [`SyncConfig::retry_same_focus`] is set, a focus equal to the
    /// previous request is ignored as well, even if that request never
    /// applied. Otherwise any armed timer is cancelled and a new one armed.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_focus_changed(&self, new_focus: Option<FocusPoint>) {
        let Some(focus) = new_focus else {
            return;
        };

        let mut state = lock(&self.state);
        if state.detached {
            debug!(%focus, "focus change after detach ignored");
            return;
        }

        if !self.config.retry_same_focus && state.last_requested == Some(focus) {
            return;
        }
        if state.last_applied == Some(focus) {
            return;
        }
        // Only armed requests count; an ignored one must not block its repeat.
        state.last_requested = Some(focus);

        if state.cancel_pending() {
            debug!(%focus, "pending fly-to superseded");
        }

        let epoch = state.epoch;
        let shared = Arc::clone(&self.state);
        let surface = Arc::clone(&self.surface);
        let config = self.config;
        state.pending = Some(OneShot::spawn(config.focus_delay, move || {
            fire(&shared, surface.as_ref(), config, epoch, focus);
        }));
        debug!(%focus, epoch, delay = ?config.focus_delay, "fly-to scheduled");
    }

    /// Cancel any armed timer and stop accepting focus changes.
    ///
    /// Once this returns, no timer that has not fired yet will call the
    /// surface. Idempotent; also run on drop.
    pub fn detach(&self) {
        let mut state = lock(&self.state);
        if state.detached {
            return;
        }
        state.detached = true;
        let cancelled = state.cancel_pending();
        debug!(cancelled, "view sync detached");
    }

    #[must_use]
    pub fn last_applied(&self) -> Option<FocusPoint> {
        lock(&self.state).last_applied
    }

    /// Whether a fly-to is armed and has not fired yet.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        lock(&self.state).pending.as_ref().is_some_and(|t| !t.is_finished())
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !lock(&self.state).detached
    }
}

impl Drop for ViewSyncController {
    fn drop(&mut self) {
        self.detach();
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn lock(state: &Mutex<SyncState>) -> MutexGuard<'_, SyncState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Timer callback. The epoch check happens under the lock; the surface calls
/// run after it is released so a surface may call back into the controller.
fn fire(shared: &Mutex<SyncState>, surface: &dyn RenderSurface, config: SyncConfig, epoch: u64, focus: FocusPoint) {
    {
        let mut state = lock(shared);
        if state.detached || state.epoch != epoch {
            return;
        }
        state.pending = None;
        if state.last_applied == Some(focus) {
            return;
        }
    }

    match apply(surface, config, focus) {
        Ok(()) => {
            lock(shared).last_applied = Some(focus);
            info!(%focus, zoom = config.zoom, duration_secs = config.duration_secs, "map recentered");
        }
        Err(e @ SyncError::NotReady) => {
            debug!(%focus, code = e.error_code(), "surface not ready; focus dropped");
        }
        Err(e) => {
            warn!(%focus, code = e.error_code(), error = %e, "fly-to failed");
        }
    }
}

fn apply(surface: &dyn RenderSurface, config: SyncConfig, focus: FocusPoint) -> Result<(), SyncError> {
    if !surface.is_container_ready() {
        return Err(SyncError::NotReady);
    }
    surface
        .animate_to(focus, config.zoom, config.duration_secs)
        .map_err(|source| SyncError::AnimationFailed { focus, source })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
