//! Normalized positions within the day.
//!
//! A [`NormalizedPosition`] expresses a time of day as a fraction of 24 hours:
//! 0.0 is midnight, 0.5 is noon. Values are always reduced into `[0, 1)`.

use serde::Serialize;

use super::time::TimeOfDay;

const HOURS_PER_DAY: f32 = 24.0;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Slack (in minutes) added before truncating a position back to a clock
/// minute. Well above f32 error near 1.0 (~1e-4 min), well below one second.
const CLOCK_SLACK_MINUTES: f64 = 1e-3;

/// A time of day as a fraction of a full day, in `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NormalizedPosition(f32);

impl NormalizedPosition {
    pub const MIDNIGHT: Self = Self(0.0);

    /// Wrap any real value into `[0, 1)`. Non-finite input maps to midnight.
    pub fn new(value: f32) -> Self {
        let wrapped = value.rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        if (0.0..1.0).contains(&wrapped) {
            Self(wrapped)
        } else {
            Self::MIDNIGHT
        }
    }

    /// Scale a time of day by hour and minute. Seconds are ignored, so two
    /// times within the same minute share a position.
    pub fn from_time(time: TimeOfDay) -> Self {
        let scaled = time.hour() as f32 / HOURS_PER_DAY
            + time.minute() as f32 / MINUTES_PER_DAY as f32;
        Self::new(scaled)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Format as a 24-hour `H:M` label without zero padding, e.g. `"6:5"`
    /// for 06:05. Minutes are truncated, never rounded.
    pub fn to_clock_string(self) -> String {
        let minutes = (f64::from(self.0) * f64::from(MINUTES_PER_DAY) + CLOCK_SLACK_MINUTES)
            .floor() as u32;
        let minutes = minutes.min(MINUTES_PER_DAY - 1);
        format!("{}:{}", minutes / 60, minutes % 60)
    }
}

impl From<TimeOfDay> for NormalizedPosition {
    fn from(time: TimeOfDay) -> Self {
        Self::from_time(time)
    }
}

impl From<NormalizedPosition> for f32 {
    fn from(position: NormalizedPosition) -> Self {
        position.0
    }
}

/// Map a raw position back to a `H:M` clock label.
///
/// `position` is wrapped into `[0, 1)` first.
pub fn position_to_clock_string(position: f32) -> String {
    NormalizedPosition::new(position).to_clock_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq_f32(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    fn tod(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute, second).unwrap()
    }

    #[test]
    fn test_scaled_reference_points() {
        assert_eq!(NormalizedPosition::from(tod(0, 0, 0)).value(), 0.0);
        assert_eq!(NormalizedPosition::from(tod(6, 0, 0)).value(), 0.25);
        assert_eq!(NormalizedPosition::from(tod(12, 0, 0)).value(), 0.5);
        assert_eq!(NormalizedPosition::from(tod(18, 0, 0)).value(), 0.75);
        assert!(approx_eq_f32(
            NormalizedPosition::from(tod(7, 30, 0)).value(),
            0.3125,
            1e-6
        ));
    }

    #[test]
    fn test_scaled_always_in_unit_interval() {
        for hour in 0..24 {
            for minute in 0..60 {
                let p = NormalizedPosition::from(tod(hour, minute, 59)).value();
                assert!((0.0..1.0).contains(&p), "{hour}:{minute} -> {p}");
            }
        }
    }

    #[test]
    fn test_seconds_are_ignored() {
        // Known precision floor: scaling has minute granularity
        let a = NormalizedPosition::from(tod(14, 20, 0));
        let b = NormalizedPosition::from(tod(14, 20, 59));
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_wraps() {
        assert!(approx_eq_f32(NormalizedPosition::new(1.25).value(), 0.25, 1e-6));
        assert!(approx_eq_f32(NormalizedPosition::new(-0.25).value(), 0.75, 1e-6));
        assert_eq!(NormalizedPosition::new(1.0).value(), 0.0);
    }

    #[test]
    fn test_new_never_reaches_one() {
        let p = NormalizedPosition::new(-1e-12);
        assert!(p.value() < 1.0);
        assert!(p.value() >= 0.0);
    }

    #[test]
    fn test_new_non_finite_is_midnight() {
        assert_eq!(NormalizedPosition::new(f32::NAN), NormalizedPosition::MIDNIGHT);
        assert_eq!(NormalizedPosition::new(f32::INFINITY), NormalizedPosition::MIDNIGHT);
    }

    #[test]
    fn test_clock_string_has_no_minute_padding() {
        assert_eq!(position_to_clock_string(0.25), "6:0");
        assert_eq!(NormalizedPosition::from(tod(6, 5, 0)).to_clock_string(), "6:5");
        assert_eq!(position_to_clock_string(0.0), "0:0");
        assert_eq!(position_to_clock_string(0.75), "18:0");
    }

    #[test]
    fn test_clock_string_truncates_minutes() {
        // 12:00 plus 59.9 seconds
        let position = 0.5 + 59.9 / 86_400.0;
        assert_eq!(position_to_clock_string(position), "12:0");
    }

    #[test]
    fn test_clock_string_end_of_day() {
        assert_eq!(position_to_clock_string(0.999_999_9), "23:59");
    }

    #[test]
    fn test_clock_string_round_trips_every_minute() {
        for hour in 0..24 {
            for minute in 0..60 {
                let label = NormalizedPosition::from(tod(hour, minute, 30)).to_clock_string();
                assert_eq!(label, format!("{hour}:{minute}"));
            }
        }
    }
}
