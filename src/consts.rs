//! Default tuning constants for view synchronization.

// ── Timing ──────────────────────────────────────────────────────

/// Delay between a focus change and the fly-to, in milliseconds. Lets the
/// surface finish any in-flight layout before it is asked to animate.
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 100;

/// Delay between attach and the forced relayout, in milliseconds.
pub const DEFAULT_RELAYOUT_DELAY_MS: u64 = 200;

// ── Animation ───────────────────────────────────────────────────

/// Zoom level used when flying to a selected property.
pub const DEFAULT_FOCUS_ZOOM: u8 = 15;

/// Fly-to animation duration, in seconds.
pub const DEFAULT_FLY_DURATION_SECS: f64 = 1.5;

// ── Coordinates ─────────────────────────────────────────────────

/// Valid latitude range, in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range, in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;
