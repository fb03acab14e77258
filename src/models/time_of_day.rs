//! Minute-of-day clock value.
//!
//! Stamps are carried as `Option<TimeOfDay>` everywhere: 00:00 is a
//! legitimate reading and must not double as "not set".

use chrono::{NaiveTime, Timelike};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A clock reading as minutes from midnight, in `[0, 1439]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from a minute-of-day count. Returns `None` outside `[0, 1439]`.
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        if (0..MINUTES_PER_DAY).contains(&minutes) {
            Some(Self(minutes as u16))
        } else {
            None
        }
    }

    /// Parse a strict `HH:MM` string (hour 0-23, minute 0-59).
    pub fn parse(s: &str) -> Option<Self> {
        let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
        Self::from_minutes(t.hour() as i64 * 60 + t.minute() as i64)
    }

    pub fn minutes(&self) -> i64 {
        self.0 as i64
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// Persisted as "HH:MM" so the stored blobs stay readable.
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::parse(&s).ok_or_else(|| D::Error::custom(format!("invalid time: {s}")))
    }
}
