//! Sunrise-sunset payload types.
//!
//! The data-fetch client receives a JSON document shaped like
//!
//! ```json
//! {
//!   "results": {
//!     "sunrise": "7:27:02 AM",
//!     "sunset": "5:05:55 PM",
//!     "civil_twilight_begin": "06:59:53 AM",
//!     "civil_twilight_end": "05:33:04 PM"
//!   },
//!   "status": "OK"
//! }
//! ```
//!
//! Only the civil twilight bounds feed the phase model; the remaining fields
//! are kept for display.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Day data for one date and location. Times are 12-hour clock strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunriseSunsetData {
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_noon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_length: Option<String>,
}

/// Envelope around [`SunriseSunsetData`] as returned by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunriseSunsetResponse {
    pub results: SunriseSunsetData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SunriseSunsetResponse {
    pub const STATUS_OK: &'static str = "OK";

    /// Decode a payload, rejecting any status other than `"OK"`. A missing
    /// status is accepted.
    pub fn from_json(json: &str) -> Result<Self> {
        let response: Self = serde_json::from_str(json)?;
        match response.status.as_deref() {
            None | Some(Self::STATUS_OK) => Ok(response),
            Some(status) => Err(Error::Status(status.to_string())),
        }
    }

    /// Decode a payload from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn into_results(self) -> SunriseSunsetData {
        self.results
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
