//! Map view synchronization for the property listing map.
//!
//! The listing pages mount a map surface and keep it centered on whichever
//! property is selected. This crate owns that behavior: coalescing rapid
//! selection changes into a single animated fly-to, refusing to animate a
//! surface that is not ready yet, and forcing one relayout shortly after the
//! surface attaches. The surface itself (tiles, markers, DOM) and the property
//! data service are external; they are reached through [`surface::RenderSurface`]
//! and [`property::PropertyRecord`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | [`view::MapView`], the mount/unmount composition the page owns |
//! | [`sync`] | Debounced fly-to controller ([`sync::ViewSyncController`]) |
//! | [`readiness`] | One-shot relayout after attach ([`readiness::SurfaceReadinessGuard`]) |
//! | [`timer`] | Cancellable one-shot timers on the Tokio runtime |
//! | [`surface`] | Rendering surface contract and its error type |
//! | [`focus`] | [`focus::FocusPoint`] coordinate value |
//! | [`property`] | Property records read from the listing data service |
//! | [`config`] | Delays, zoom and duration loaded from the environment |
//! | [`consts`] | Default tuning constants |

pub mod config;
pub mod consts;
pub mod focus;
pub mod property;
pub mod readiness;
pub mod surface;
pub mod sync;
pub mod timer;
pub mod view;

#[cfg(test)]
mod test_support;

pub use config::SyncConfig;
pub use focus::FocusPoint;
pub use property::PropertyRecord;
pub use surface::{RenderSurface, SurfaceError};
pub use view::MapView;
