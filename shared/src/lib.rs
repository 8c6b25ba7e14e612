//! FitPro Shared Library
//!
//! This crate contains the coaching core shared by the backend and WASM
//! modules: program timelines, weekday plan resolution, and list helpers.

pub mod clock;
pub mod errors;
pub mod listing;
pub mod models;
pub mod schedule;
pub mod timeline;
pub mod types;
pub mod validation;
pub mod weekday;

// Re-export commonly used items
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::*;
pub use listing::{paginate, ProgramFilter};
pub use models::*;
pub use schedule::{DayCell, DayContent, RestToggle, Schedule, WeekPlan};
pub use timeline::{ProgramStatus, Timeline};
pub use weekday::WeekdayKey;
