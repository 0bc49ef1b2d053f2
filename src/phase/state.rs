//! Serializable snapshot of a phase model.

use serde::Serialize;

use super::SolarPhaseModel;

/// Flat, read-only view of a [`SolarPhaseModel`] for hand-off to a renderer
/// or for JSON output. Positions are raw floats in `[0, 1)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhaseSnapshot {
    pub sunrise_position: f32,
    pub sunset_position: f32,
    pub solar_noon: f32,
    pub cycle_offset: f32,
    pub twilight_height: f32,
    pub current_sun_position: f32,

    // Input anomalies
    pub degenerate: bool,
    pub inverted: bool,

    // Clock labels ("H:M", unpadded)
    pub sunrise_label: String,
    pub sunset_label: String,
    pub solar_noon_label: String,
    pub current_label: String,
}

impl From<&SolarPhaseModel> for PhaseSnapshot {
    fn from(model: &SolarPhaseModel) -> Self {
        Self {
            sunrise_position: model.sunrise_position().value(),
            sunset_position: model.sunset_position().value(),
            solar_noon: model.solar_noon().value(),
            cycle_offset: model.cycle_offset().value(),
            twilight_height: model.twilight_height(),
            current_sun_position: model.current_sun_position().value(),
            degenerate: model.is_degenerate(),
            inverted: model.is_inverted(),
            sunrise_label: model.sunrise_position().to_clock_string(),
            sunset_label: model.sunset_position().to_clock_string(),
            solar_noon_label: model.solar_noon().to_clock_string(),
            current_label: model.current_sun_position().to_clock_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
