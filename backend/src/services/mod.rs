//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the coaching core in `fitpro_shared`.

pub mod program;
pub mod student;

pub use program::ProgramService;
pub use student::StudentPlanService;

use fitpro_shared::types::RestToggleResponse;
use fitpro_shared::RestToggle;

fn rest_toggle_response(toggle: RestToggle) -> RestToggleResponse {
    let message = if toggle.is_rest {
        format!("{} is now a rest day", toggle.day.label())
    } else {
        format!("{} is now a training day", toggle.day.label())
    };

    RestToggleResponse {
        day: toggle.day,
        is_rest: toggle.is_rest,
        selected_day: toggle.selected_day,
        message,
    }
}
