//! Failures surfaced at the dashboard boundary.
//!
//! Malformed numeric fields and degenerate chart geometry are recovered where
//! they occur and never show up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dataset unavailable at {location}: {reason}")]
    DataUnavailable { location: String, reason: String },

    #[error("dataset could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn unavailable(location: &str, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}
