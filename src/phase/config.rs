//! Phase model configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::time::TWELVE_HOUR_FORMAT;
use crate::core::Result;

/// Tunables for building a [`super::SolarPhaseModel`].
///
/// Missing fields in a JSON file fall back to [`Default`], which reproduces
/// the fixed behavior of [`super::SolarPhaseModel::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    /// Normalized position that solar noon is shifted onto. Downstream
    /// color curves are authored with their peak here. Default 0.25.
    pub noon_anchor: f32,
    /// chrono pattern used to parse sunrise/sunset strings.
    pub time_format: String,
}

impl PhaseConfig {
    pub const DEFAULT_NOON_ANCHOR: f32 = 0.25;

    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            noon_anchor: Self::DEFAULT_NOON_ANCHOR,
            time_format: TWELVE_HOUR_FORMAT.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
