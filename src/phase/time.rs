//! Time of day independent of any calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::core::{Error, Result};

/// chrono pattern for the 12-hour clock strings delivered by the
/// sunrise-sunset data source, e.g. `"06:12:45 AM"`.
pub const TWELVE_HOUR_FORMAT: &str = "%I:%M:%S %p";

/// Hour, minute and second within a single day, range `[00:00:00, 24:00:00)`.
///
/// Seconds are carried for display but do not take part in phase scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0 };

    /// Create a time of day, rejecting components outside their clock range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(Error::OutOfRange { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    /// Create a time of day on a whole minute.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        Self::new(hour, minute, 0)
    }

    /// Parse `input` with a chrono format pattern.
    pub fn parse(input: &str, format: &str) -> Result<Self> {
        NaiveTime::parse_from_str(input.trim(), format)
            .map(Self::from)
            .map_err(|source| Error::Format {
                input: input.to_string(),
                format: format.to_string(),
                source,
            })
    }

    /// Parse a 12-hour clock string with AM/PM designator.
    pub fn parse_12h(input: &str) -> Result<Self> {
        Self::parse(input, TWELVE_HOUR_FORMAT)
    }

    /// Local wall-clock time of day.
    pub fn now() -> Self {
        Self::from(chrono::Local::now().time())
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.second
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_12h(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_12h_morning() {
        let t = TimeOfDay::parse_12h("06:12:45 AM").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (6, 12, 45));
    }

    #[test]
    fn test_parse_12h_afternoon() {
        let t = TimeOfDay::parse_12h("05:45:00 PM").unwrap();
        assert_eq!((t.hour(), t.minute()), (17, 45));
    }

    #[test]
    fn test_parse_12h_noon_and_midnight() {
        let noon = TimeOfDay::parse_12h("12:00:00 PM").unwrap();
        assert_eq!(noon.hour(), 12);
        let midnight = TimeOfDay::parse_12h("12:00:00 AM").unwrap();
        assert_eq!(midnight, TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let t = TimeOfDay::parse_12h("  07:30:00 AM\n").unwrap();
        assert_eq!((t.hour(), t.minute()), (7, 30));
    }

    #[test]
    fn test_parse_garbage_is_format_error() {
        let err = TimeOfDay::parse_12h("garbage").unwrap_err();
        match err {
            Error::Format { input, format, .. } => {
                assert_eq!(input, "garbage");
                assert_eq!(format, TWELVE_HOUR_FORMAT);
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_24h_string_rejected_by_12h_format() {
        assert!(TimeOfDay::parse_12h("17:45:00").is_err());
    }

    #[test]
    fn test_parse_custom_format() {
        let t = TimeOfDay::parse("17:45", "%H:%M").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (17, 45, 0));
    }

    #[test]
    fn test_from_str() {
        let t: TimeOfDay = "09:05:30 PM".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (21, 5, 30));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 60, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 60).is_err());
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
    }

    #[test]
    fn test_from_naive_time() {
        let naive = NaiveTime::from_hms_opt(18, 30, 15).unwrap();
        let t = TimeOfDay::from(naive);
        assert_eq!(t, TimeOfDay::new(18, 30, 15).unwrap());
    }

    #[test]
    fn test_display_is_zero_padded() {
        let t = TimeOfDay::new(6, 5, 9).unwrap();
        assert_eq!(t.to_string(), "06:05:09");
    }

    #[test]
    fn test_ordering() {
        let a = TimeOfDay::from_hm(6, 0).unwrap();
        let b = TimeOfDay::from_hm(18, 0).unwrap();
        assert!(a < b);
    }
}
