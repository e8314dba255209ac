//! Property records as served by the listing data service.
//!
//! Only the fields the map needs are modeled; unknown fields in the payload
//! are ignored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::focus::FocusPoint;

#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("property payload parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl PropertyRecord {
    /// Parse a JSON array of records.
    pub fn parse_list(json: &str) -> Result<Vec<Self>, PropertyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Map focus for this record, if it is geolocated.
    #[must_use]
    pub fn focus_point(&self) -> Option<FocusPoint> {
        FocusPoint::from_coords(self.latitude, self.longitude)
    }
}

/// Focus of the record with `id`, if present and geolocated.
#[must_use]
pub fn find_focus(records: &[PropertyRecord], id: Uuid) -> Option<FocusPoint> {
    records.iter().find(|r| r.id == id).and_then(PropertyRecord::focus_point)
}

#[cfg(test)]
#[path = "property_test.rs"]
mod tests;
