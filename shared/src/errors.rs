//! Error types for the FitPro coaching core

use thiserror::Error;

use crate::weekday::WeekdayKey;

/// Errors raised while computing a program timeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Invalid start date: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

impl TimelineError {
    /// Name of the input field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            TimelineError::InvalidDate(_) => "start_date",
            TimelineError::InvalidDuration(_) => "duration_days",
        }
    }
}

/// Errors raised by weekly schedule operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("At least one day must remain a non-rest day")]
    LastActiveDay,

    #[error("{0} is a rest day")]
    RestDay(WeekdayKey),

    #[error("{0} has no plan")]
    NotSelectable(WeekdayKey),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("{0} is listed as both a training day and a rest day")]
    OverlappingDay(WeekdayKey),
}
