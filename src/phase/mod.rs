//! Solar day/night phase model.
//!
//! Turns a day's sunrise and sunset into a periodic, normalized coordinate
//! system in which the renderer can blend its warm/cool overlay. The main
//! entry point is [`SolarPhaseModel`], built once per day and refreshed each
//! tick with [`update_current_position`](SolarPhaseModel::update_current_position).

pub mod config;
pub mod data;
pub mod position;
pub mod state;
pub mod time;

// Re-exports
pub use config::PhaseConfig;
pub use data::{SunriseSunsetData, SunriseSunsetResponse};
pub use position::{NormalizedPosition, position_to_clock_string};
pub use state::PhaseSnapshot;
pub use time::{TWELVE_HOUR_FORMAT, TimeOfDay};

use std::f64::consts::TAU;

use log::{debug, trace, warn};

use crate::core::Result;

// ---------------------------------------------------------------------------
// SolarPhaseModel
// ---------------------------------------------------------------------------

/// Where "now" sits within one solar day/night cycle.
///
/// Everything except the current sun position is fixed at construction.
/// Build a new model when the day rolls over or fresh sunrise/sunset data
/// arrives.
///
/// Sunrise and sunset are assumed to fall on the same calendar day. Equal
/// inputs ([`is_degenerate`](Self::is_degenerate)) and a sunset earlier than
/// sunrise ([`is_inverted`](Self::is_inverted)) are computed literally; the
/// resulting values are well-defined floats but carry no meaning for callers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarPhaseModel {
    sunrise_position: NormalizedPosition,
    sunset_position: NormalizedPosition,
    solar_noon: NormalizedPosition,
    cycle_offset: NormalizedPosition,
    twilight_height: f32,
    current_sun_position: NormalizedPosition,
}

impl SolarPhaseModel {
    /// Build a model with solar noon anchored at 0.25.
    pub fn new(sunrise: TimeOfDay, sunset: TimeOfDay, current: TimeOfDay) -> Self {
        Self::with_anchor(sunrise, sunset, current, PhaseConfig::DEFAULT_NOON_ANCHOR)
    }

    /// Build a model using the anchor from `config`.
    pub fn with_config(
        config: &PhaseConfig,
        sunrise: TimeOfDay,
        sunset: TimeOfDay,
        current: TimeOfDay,
    ) -> Self {
        Self::with_anchor(sunrise, sunset, current, config.noon_anchor)
    }

    /// Parse 12-hour sunrise/sunset strings (`"06:12:45 AM"`) and build a
    /// model. Fails with [`Error::Format`](crate::core::Error::Format) if
    /// either string does not parse.
    pub fn parse(sunrise: &str, sunset: &str, current: TimeOfDay) -> Result<Self> {
        Self::parse_with(&PhaseConfig::default(), sunrise, sunset, current)
    }

    /// Like [`parse`](Self::parse), with the time format and anchor taken
    /// from `config`.
    pub fn parse_with(
        config: &PhaseConfig,
        sunrise: &str,
        sunset: &str,
        current: TimeOfDay,
    ) -> Result<Self> {
        let sunrise = TimeOfDay::parse(sunrise, &config.time_format)?;
        let sunset = TimeOfDay::parse(sunset, &config.time_format)?;
        Ok(Self::with_config(config, sunrise, sunset, current))
    }

    /// Build a model from a sunrise-sunset payload, using the civil twilight
    /// bounds as sunrise and sunset.
    pub fn from_data(data: &SunriseSunsetData, current: TimeOfDay) -> Result<Self> {
        Self::from_data_with(&PhaseConfig::default(), data, current)
    }

    pub fn from_data_with(
        config: &PhaseConfig,
        data: &SunriseSunsetData,
        current: TimeOfDay,
    ) -> Result<Self> {
        Self::parse_with(
            config,
            &data.civil_twilight_begin,
            &data.civil_twilight_end,
            current,
        )
    }

    /// Recompute the current sun position. No other field changes.
    pub fn update_current_position(&mut self, current: TimeOfDay) -> NormalizedPosition {
        self.current_sun_position = NormalizedPosition::from(current);
        trace!(
            "Sun position at {current}: {:.4}",
            self.current_sun_position.value()
        );
        self.current_sun_position
    }

    /// Copy of this model with the current position moved to `current`.
    #[must_use]
    pub fn at(mut self, current: TimeOfDay) -> Self {
        self.update_current_position(current);
        self
    }

    #[inline]
    pub fn sunrise_position(&self) -> NormalizedPosition {
        self.sunrise_position
    }

    #[inline]
    pub fn sunset_position(&self) -> NormalizedPosition {
        self.sunset_position
    }

    /// Midpoint between sunrise and sunset.
    #[inline]
    pub fn solar_noon(&self) -> NormalizedPosition {
        self.solar_noon
    }

    /// Horizontal shift that moves solar noon onto the noon anchor.
    #[inline]
    pub fn cycle_offset(&self) -> NormalizedPosition {
        self.cycle_offset
    }

    /// Height of the twilight boundary on the virtual sun path, in `[0, 1]`.
    #[inline]
    pub fn twilight_height(&self) -> f32 {
        self.twilight_height
    }

    #[inline]
    pub fn current_sun_position(&self) -> NormalizedPosition {
        self.current_sun_position
    }

    /// Sunrise and sunset scale to the same position: the day has no length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.sunrise_position == self.sunset_position
    }

    /// Sunset scales before sunrise, i.e. the inputs span midnight.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.sunset_position < self.sunrise_position
    }

    pub fn snapshot(&self) -> PhaseSnapshot {
        PhaseSnapshot::from(self)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn with_anchor(
        sunrise: TimeOfDay,
        sunset: TimeOfDay,
        current: TimeOfDay,
        noon_anchor: f32,
    ) -> Self {
        let sunrise_position = NormalizedPosition::from(sunrise);
        let sunset_position = NormalizedPosition::from(sunset);

        let noon = solar_noon(sunrise_position.value(), sunset_position.value());
        let cycle_offset = NormalizedPosition::new((noon - noon_anchor) + 1.0);
        let twilight_height = twilight_height(
            sunrise_position.value(),
            sunset_position.value(),
            cycle_offset.value(),
        );

        let model = Self {
            sunrise_position,
            sunset_position,
            solar_noon: NormalizedPosition::new(noon),
            cycle_offset,
            twilight_height,
            current_sun_position: NormalizedPosition::from(current),
        };

        if model.is_degenerate() {
            warn!("Sunrise and sunset coincide at {sunrise}; day length is zero");
        } else if model.is_inverted() {
            warn!("Sunset {sunset} is before sunrise {sunrise}; expected a single calendar day");
        }
        debug!(
            "Solar phase: sunrise={:.4} sunset={:.4} noon={:.4} offset={:.4} twilight={:.4}",
            model.sunrise_position.value(),
            model.sunset_position.value(),
            model.solar_noon.value(),
            model.cycle_offset.value(),
            model.twilight_height,
        );

        model
    }
}

fn solar_noon(sunrise: f32, sunset: f32) -> f32 {
    sunrise + (sunset - sunrise) / 2.0
}

/// Map an angle in radians to `[0, 1]` of a full turn.
fn normalize_radian(radian: f64) -> f64 {
    ((radian + TAU) % TAU) / TAU
}

/// Average sine height of the phase-shifted sunrise and sunset angles.
fn twilight_height(sunrise: f32, sunset: f32, cycle_offset: f32) -> f32 {
    let offset = f64::from(cycle_offset) * TAU;
    let sunrise_angle = f64::from(sunrise) * TAU + offset;
    let sunset_angle = f64::from(sunset) * TAU + offset;

    normalize_radian((sunrise_angle.sin() + sunset_angle.sin()) / 2.0) as f32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
