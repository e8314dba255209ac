//! Map view: the unit a listing page mounts.
//!
//! Pairs a [`ViewSyncController`] and a [`SurfaceReadinessGuard`] over one
//! surface. Mounting arms the relayout; selecting a property flies to it;
//! unmounting tears both down before the surface is disposed.

use std::sync::Arc;

use tracing::debug;

use crate::config::SyncConfig;
use crate::focus::FocusPoint;
use crate::property::PropertyRecord;
use crate::readiness::SurfaceReadinessGuard;
use crate::surface::RenderSurface;
use crate::sync::ViewSyncController;

pub struct MapView {
    sync: ViewSyncController,
    guard: SurfaceReadinessGuard,
}

impl MapView {
    /// Attach to `surface` and schedule the post-attach relayout.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn mount(surface: Arc<dyn RenderSurface>, config: SyncConfig) -> Self {
        let guard = SurfaceReadinessGuard::new(Arc::clone(&surface), config.relayout_delay);
        guard.on_attach();
        let sync = ViewSyncController::attach(surface, config);
        debug!("map view mounted");
        Self { sync, guard }
    }

    pub fn focus(&self, focus: Option<FocusPoint>) {
        self.sync.on_focus_changed(focus);
    }

    /// Fly to the selected record. Records without coordinates are ignored.
    pub fn select(&self, record: &PropertyRecord) {
        let focus = record.focus_point();
        if focus.is_none() {
            debug!(id = %record.id, "selected property has no coordinates");
        }
        self.sync.on_focus_changed(focus);
    }

    /// Cancel all pending timers. Idempotent; also run on drop.
    pub fn unmount(&self) {
        if !self.sync.is_attached() {
            return;
        }
        self.guard.detach();
        self.sync.detach();
        debug!("map view unmounted");
    }

    #[must_use]
    pub fn last_applied(&self) -> Option<FocusPoint> {
        self.sync.last_applied()
    }

    /// Whether a fly-to or relayout is still pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.sync.has_pending() || self.guard.has_pending()
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
