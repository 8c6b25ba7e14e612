//! Weekday keys for a Saturday-first week

use chrono::{DateTime, Datelike, FixedOffset, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ScheduleError;

/// One of the seven days of a Saturday-first week.
///
/// The derived ordering follows week order, so sets and maps keyed by
/// `WeekdayKey` iterate Saturday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayKey {
    Sat,
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl WeekdayKey {
    /// All keys in week order
    pub const ALL: [WeekdayKey; 7] = [
        WeekdayKey::Sat,
        WeekdayKey::Sun,
        WeekdayKey::Mon,
        WeekdayKey::Tue,
        WeekdayKey::Wed,
        WeekdayKey::Thu,
        WeekdayKey::Fri,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeekdayKey::Sat => "sat",
            WeekdayKey::Sun => "sun",
            WeekdayKey::Mon => "mon",
            WeekdayKey::Tue => "tue",
            WeekdayKey::Wed => "wed",
            WeekdayKey::Thu => "thu",
            WeekdayKey::Fri => "fri",
        }
    }

    /// Full English day name
    pub fn label(self) -> &'static str {
        match self {
            WeekdayKey::Sat => "Saturday",
            WeekdayKey::Sun => "Sunday",
            WeekdayKey::Mon => "Monday",
            WeekdayKey::Tue => "Tuesday",
            WeekdayKey::Wed => "Wednesday",
            WeekdayKey::Thu => "Thursday",
            WeekdayKey::Fri => "Friday",
        }
    }

    /// Zero-based position in the Saturday-first week
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map chrono's Monday-first weekday onto the Saturday-first keys
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => WeekdayKey::Sat,
            Weekday::Sun => WeekdayKey::Sun,
            Weekday::Mon => WeekdayKey::Mon,
            Weekday::Tue => WeekdayKey::Tue,
            Weekday::Wed => WeekdayKey::Wed,
            Weekday::Thu => WeekdayKey::Thu,
            Weekday::Fri => WeekdayKey::Fri,
        }
    }

    /// Weekday of `instant` as observed at the given UTC offset
    pub fn of_instant(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::from_weekday(instant.with_timezone(&offset).weekday())
    }
}

impl fmt::Display for WeekdayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekdayKey {
    type Err = ScheduleError;

    /// Accepts the three-letter key or the full day name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        WeekdayKey::ALL
            .into_iter()
            .find(|day| {
                normalized == day.as_str() || normalized == day.label().to_ascii_lowercase()
            })
            .ok_or_else(|| ScheduleError::UnknownWeekday(s.to_string()))
    }
}
