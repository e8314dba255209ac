#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_LATITUDE, MAX_LONGITUDE};

/// Desired view center, in WGS84 degrees.
///
/// Equality is exact on both fields. Two points that differ only by float
/// noise are different focuses and will each animate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl FocusPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a point from optional coordinates, as stored on property records.
    ///
    /// Returns `None` unless both coordinates are present and form a valid
    /// point (see [`FocusPoint::is_valid`]).
    #[must_use]
    pub fn from_coords(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        let point = Self::new(latitude?, longitude?);
        point.is_valid().then_some(point)
    }

    /// Finite and within latitude/longitude bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= MAX_LATITUDE
            && self.longitude.abs() <= MAX_LONGITUDE
    }
}

impl std::fmt::Display for FocusPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
