//! Rendering surface contract.
//!
//! The map widget (tiles, markers, container element) lives outside this
//! crate. Controllers only ever talk to it through [`RenderSurface`].

use crate::focus::FocusPoint;

/// Failure reported by a surface while animating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface is detached")]
    Detached,
    #[error("surface rejected animation: {reason}")]
    Rejected { reason: String },
}

/// A map-like viewport that can recenter with an animation and recompute its
/// size.
///
/// Implementations are shared with timer tasks, so they must be `Send + Sync`
/// and use interior mutability for any state they track. Controllers release
/// their own locks before calling in, so a surface may call back into the
/// controller that drives it (a move-end handler requesting a new focus, say).
pub trait RenderSurface: Send + Sync {
    /// Whether the container is attached and laid out.
    fn is_container_ready(&self) -> bool;

    /// Fly to `focus` at `zoom` over `duration_secs`.
    ///
    /// May fail if the surface was torn down after the readiness check.
    fn animate_to(&self, focus: FocusPoint, zoom: u8, duration_secs: f64) -> Result<(), SurfaceError>;

    /// Recompute the container size.
    fn force_relayout(&self);
}
