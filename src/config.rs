//! View sync configuration parsed from environment variables.

use std::time::Duration;

use crate::consts::{DEFAULT_FLY_DURATION_SECS, DEFAULT_FOCUS_DELAY_MS, DEFAULT_FOCUS_ZOOM, DEFAULT_RELAYOUT_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncConfig {
    /// Debounce window between a focus change and the fly-to.
    pub focus_delay: Duration,
    /// Delay between attach and the forced relayout.
    pub relayout_delay: Duration,
    /// Zoom level passed to every fly-to.
    pub zoom: u8,
    /// Fly-to duration in seconds.
    pub duration_secs: f64,
    /// When false, repeating the previous request is ignored even if it never
    /// applied (dropped as not ready, or the animation failed). When true,
    /// only a focus equal to the last applied one is ignored.
    pub retry_same_focus: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            focus_delay: Duration::from_millis(DEFAULT_FOCUS_DELAY_MS),
            relayout_delay: Duration::from_millis(DEFAULT_RELAYOUT_DELAY_MS),
            zoom: DEFAULT_FOCUS_ZOOM,
            duration_secs: DEFAULT_FLY_DURATION_SECS,
            retry_same_focus: false,
        }
    }
}

impl SyncConfig {
    /// Build config from environment variables, falling back to defaults for
    /// anything missing or unparsable.
    ///
    /// - `VIEW_SYNC_FOCUS_DELAY_MS`: default 100
    /// - `VIEW_SYNC_RELAYOUT_DELAY_MS`: default 200
    /// - `VIEW_SYNC_ZOOM`: default 15
    /// - `VIEW_SYNC_DURATION_SECS`: default 1.5 (must be finite and >= 0)
    /// - `VIEW_SYNC_RETRY_SAME_FOCUS`: default false
    #[must_use]
    pub fn from_env() -> Self {
        let duration_secs = env_parse("VIEW_SYNC_DURATION_SECS", DEFAULT_FLY_DURATION_SECS);
        let duration_secs = if duration_secs.is_finite() && duration_secs >= 0.0 {
            duration_secs
        } else {
            DEFAULT_FLY_DURATION_SECS
        };

        Self {
            focus_delay: Duration::from_millis(env_parse("VIEW_SYNC_FOCUS_DELAY_MS", DEFAULT_FOCUS_DELAY_MS)),
            relayout_delay: Duration::from_millis(env_parse("VIEW_SYNC_RELAYOUT_DELAY_MS", DEFAULT_RELAYOUT_DELAY_MS)),
            zoom: env_parse("VIEW_SYNC_ZOOM", DEFAULT_FOCUS_ZOOM),
            duration_secs,
            retry_same_focus: env_parse("VIEW_SYNC_RETRY_SAME_FOCUS", false),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
