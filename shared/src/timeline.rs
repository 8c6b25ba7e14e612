//! Program timeline computation
//!
//! Converts a program's start date and duration into a [`Timeline`] snapshot
//! relative to an injected "now". Nothing here reads the system clock except
//! [`Timeline::compute_now`].

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::errors::TimelineError;

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Placeholder shown for dates that cannot be displayed
pub const UNKNOWN_DATE: &str = "—";

/// Progress snapshot of a program at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub total_days: u32,
    pub passed_days: u32,
    pub remaining_days: u32,
    pub percent: u8,
    pub is_active: bool,
    pub is_expired: bool,
}

/// Coarse program status derived from a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    NotStarted,
    Active,
    Expired,
}

impl Timeline {
    /// Compute the timeline of a program starting at `start` and lasting
    /// `duration_days`, as seen at `now`.
    pub fn compute(start: DateTime<Utc>, duration_days: u32, now: DateTime<Utc>) -> Self {
        let total = i64::from(duration_days);

        // floor, not truncation: an instant one hour before start is day -1
        let diff_days = (now - start).num_milliseconds().div_euclid(MS_PER_DAY);
        let passed = diff_days.clamp(0, total);
        let remaining = (total - passed).clamp(0, total);

        let percent = if total == 0 {
            0
        } else {
            // round half up, in integers
            (200 * passed + total) / (2 * total)
        };

        let is_expired = total > 0
            && start
                .checked_add_signed(Duration::days(total))
                .map_or(false, |end| now >= end);
        let is_active = now >= start && !is_expired;

        Self {
            total_days: duration_days,
            passed_days: passed as u32,
            remaining_days: remaining as u32,
            percent: percent as u8,
            is_active,
            is_expired,
        }
    }

    /// Compute from raw inputs, validating both.
    pub fn from_input(
        start_date: &str,
        duration_days: f64,
        now: DateTime<Utc>,
    ) -> Result<Self, TimelineError> {
        let start = parse_start_date(start_date)?;
        let duration = parse_duration_days(duration_days)?;
        Ok(Self::compute(start, duration, now))
    }

    /// Compute against the given clock
    pub fn compute_at(start: DateTime<Utc>, duration_days: u32, clock: &dyn Clock) -> Self {
        Self::compute(start, duration_days, clock.now())
    }

    /// Compute against the system clock
    pub fn compute_now(start: DateTime<Utc>, duration_days: u32) -> Self {
        Self::compute_at(start, duration_days, &SystemClock)
    }

    pub fn status(&self) -> ProgramStatus {
        if self.is_expired {
            ProgramStatus::Expired
        } else if self.is_active {
            ProgramStatus::Active
        } else {
            ProgramStatus::NotStarted
        }
    }

    pub fn remaining_label(&self) -> String {
        remaining_days_label(self.remaining_days)
    }
}

/// Date-time layouts accepted without an offset, or with a bare `Z`
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 instant.
///
/// Date-times without an offset are read as UTC, and a bare `YYYY-MM-DD`
/// date is midnight UTC.
pub fn parse_start_date(input: &str) -> Result<DateTime<Utc>, TimelineError> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    if let Some(instant) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(naive, layout).ok())
    {
        return Ok(instant.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimelineError::InvalidDate(input.to_string()))
}

/// Coerce a numeric duration into whole days.
///
/// Rejects values that are not finite, negative, fractional, or beyond `u32`.
pub fn parse_duration_days(value: f64) -> Result<u32, TimelineError> {
    if !value.is_finite() {
        return Err(TimelineError::InvalidDuration(
            "duration must be a finite number".to_string(),
        ));
    }
    if value < 0.0 {
        return Err(TimelineError::InvalidDuration(format!(
            "duration cannot be negative ({value})"
        )));
    }
    if value.fract() != 0.0 {
        return Err(TimelineError::InvalidDuration(format!(
            "duration must be a whole number of days ({value})"
        )));
    }
    if value > f64::from(u32::MAX) {
        return Err(TimelineError::InvalidDuration(format!(
            "duration is too large ({value})"
        )));
    }
    Ok(value as u32)
}

/// Human phrasing of the days left in a program
pub fn remaining_days_label(remaining_days: u32) -> String {
    match remaining_days {
        0 => "Course ended".to_string(),
        1 => "1 day remaining".to_string(),
        n => format!("{n} days remaining"),
    }
}

/// Display form of a start date, e.g. "1 February 2026".
///
/// Returns [`UNKNOWN_DATE`] for input that does not parse.
pub fn format_start_date(input: &str) -> String {
    match parse_start_date(input) {
        Ok(instant) => format_date(instant),
        Err(_) => UNKNOWN_DATE.to_string(),
    }
}

/// Display form of an instant's calendar date in UTC
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%-d %B %Y").to_string()
}
