//! Wall-clock time of day without a date.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidTimeError, ParseError};
use crate::format::format_clock_time;

pub(crate) const MINUTES_PER_DAY: i64 = 24 * 60;

/// A validated time of day: hour in 0-23, minute in 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Midnight (0:00).
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a time of day after range validation.
    pub const fn new(hour: u32, minute: u32) -> Result<Self, InvalidTimeError> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeError { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight, in 0..1440.
    #[must_use]
    pub const fn minute_of_day(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Shifts the time by a signed number of minutes, wrapping around midnight
    /// in either direction. The day component is discarded.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid keeps the value in 0..1440"
    )]
    pub fn wrapping_add_minutes(self, delta: i64) -> Self {
        let total = (i64::from(self.minute_of_day()) + delta).rem_euclid(MINUTES_PER_DAY) as u32;
        Self {
            hour: total / 60,
            minute: total % 60,
        }
    }

    /// Canonical 24-hour form, e.g. `"07:05"`.
    #[must_use]
    pub fn to_24h_string(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_clock_time(*self))
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_time(s)
    }
}

impl From<NaiveTime> for ClockTime {
    /// Drops seconds and sub-second precision.
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(t: ClockTime) -> Self {
        Self::from_hms_opt(t.hour, t.minute, 0).unwrap_or_default()
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_24h_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(
            ClockTime::new(24, 0),
            Err(InvalidTimeError { hour: 24, minute: 0 })
        );
        assert_eq!(
            ClockTime::new(7, 60),
            Err(InvalidTimeError { hour: 7, minute: 60 })
        );
    }

    #[test]
    fn wrapping_add_crosses_midnight_forward() {
        assert_eq!(t(23, 0).wrapping_add_minutes(6 * 60 + 14), t(5, 14));
        assert_eq!(t(23, 59).wrapping_add_minutes(1), ClockTime::MIDNIGHT);
    }

    #[test]
    fn wrapping_add_crosses_midnight_backward() {
        assert_eq!(t(1, 0).wrapping_add_minutes(-(9 * 60 + 30)), t(15, 30));
        assert_eq!(ClockTime::MIDNIGHT.wrapping_add_minutes(-1), t(23, 59));
    }

    #[test]
    fn wrapping_add_full_days_is_identity() {
        assert_eq!(t(8, 15).wrapping_add_minutes(3 * MINUTES_PER_DAY), t(8, 15));
        assert_eq!(t(8, 15).wrapping_add_minutes(-MINUTES_PER_DAY), t(8, 15));
    }

    #[test]
    fn naive_time_interop_drops_seconds() {
        let naive = NaiveTime::from_hms_opt(22, 41, 59).unwrap();
        let clock = ClockTime::from(naive);
        assert_eq!(clock, t(22, 41));
        assert_eq!(
            NaiveTime::from(clock),
            NaiveTime::from_hms_opt(22, 41, 0).unwrap()
        );
    }

    #[test]
    fn display_uses_twelve_hour_clock() {
        assert_eq!(t(0, 0).to_string(), "12:00 AM");
        assert_eq!(t(13, 5).to_string(), "1:05 PM");
    }

    #[test]
    fn serde_uses_24h_string() {
        let json = serde_json::to_string(&t(7, 5)).unwrap();
        assert_eq!(json, "\"07:05\"");
        let parsed: ClockTime = serde_json::from_str("\"7:05 pm\"").unwrap();
        assert_eq!(parsed, t(19, 5));
    }

    #[test]
    fn serde_rejects_garbage() {
        let result: Result<ClockTime, _> = serde_json::from_str("\"25:00\"");
        assert!(result.is_err());
    }
}
