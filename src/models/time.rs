//! Wall-clock time and time window models.
//!
//! # Time Model
//! Sections repeat weekly, so only the time of day matters. All times
//! are minutes since midnight (UTC wall clock); calendar dates are never
//! consulted. Days are handled separately by [`Weekday`](super::Weekday).
//!
//! # Overlap
//! Windows are half-open `[start, end)`: a window ending at 12:00 and one
//! starting at 12:00 touch but do not overlap.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day, stored as minutes since midnight.
///
/// Serialized as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

/// Error returned when an `HH:MM` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(pub String);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a clock time from hours and minutes.
    ///
    /// Returns `None` outside `00:00..=23:59`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Creates a clock time from minutes since midnight.
    ///
    /// Returns `None` if `minutes` is a full day or more.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Hour component (0..24).
    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    /// Minute component (0..60).
    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        if h.is_empty() || m.len() != 2 {
            return Err(err());
        }
        let hour: u32 = h.parse().map_err(|_| err())?;
        let minute: u32 = m.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).ok_or_else(err)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A time-of-day interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Duration of this window in minutes (0 if inverted).
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether a time of day falls within this window.
    #[inline]
    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(t("08:30").minutes(), 510);
        assert_eq!(t("8:05").minutes(), 485);
        assert_eq!(t("23:59").to_string(), "23:59");
        assert_eq!(ClockTime::from_hm(7, 0).unwrap().to_string(), "07:00");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "12", "12:", "24:00", "12:60", "ab:cd", "12:5", "12:005"] {
            assert!(bad.parse::<ClockTime>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_from_minutes_bounds() {
        assert!(ClockTime::from_minutes(0).is_some());
        assert!(ClockTime::from_minutes(MINUTES_PER_DAY - 1).is_some());
        assert!(ClockTime::from_minutes(MINUTES_PER_DAY).is_none());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&t("14:00")).unwrap();
        assert_eq!(json, "\"14:00\"");
        let back: ClockTime = serde_json::from_str("\"09:15\"").unwrap();
        assert_eq!(back, t("09:15"));
        assert!(serde_json::from_str::<ClockTime>("\"9am\"").is_err());
    }

    #[test]
    fn test_time_window() {
        let w = TimeWindow::new(t("12:00"), t("14:00"));
        assert_eq!(w.duration_minutes(), 120);
        assert!(w.contains(t("12:00")));
        assert!(w.contains(t("13:59")));
        assert!(!w.contains(t("14:00"))); // exclusive end
        assert!(!w.contains(t("11:59")));
    }

    #[test]
    fn test_time_window_overlap() {
        let lunch = TimeWindow::new(t("12:00"), t("14:00"));
        let before = TimeWindow::new(t("10:00"), t("12:00")); // touching
        let after = TimeWindow::new(t("14:00"), t("16:00")); // touching
        let one_minute = TimeWindow::new(t("10:00"), t("12:01"));
        assert!(!lunch.overlaps(&before));
        assert!(!lunch.overlaps(&after));
        assert!(lunch.overlaps(&one_minute));
        assert!(one_minute.overlaps(&lunch));
    }
}
