//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use validator::Validate;

use crate::listing::ProgramFilter;
use crate::models::{DayEntry, DayPlan, PlanType, Program, StudentPlan, StudentStatus};
use crate::schedule::{DayCell, DayContent, Schedule, WeekPlan};
use crate::timeline::{format_date, ProgramStatus, Timeline};
use crate::weekday::WeekdayKey;

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Programs
// ============================================================================

/// Program list query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramListQuery {
    #[serde(default)]
    pub filter: ProgramFilter,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Create program request.
///
/// `start_date` and `duration_days` arrive raw and are validated by the
/// timeline parsers, so a bad date is reported instead of stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProgramRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub goal: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub level: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub coach: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub tags: Vec<String>,
    pub start_date: String,
    pub duration_days: f64,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub plan_by_day: BTreeMap<WeekdayKey, DayPlan>,
}

/// Program with its timeline as of the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSummaryResponse {
    pub id: String,
    pub title: String,
    pub goal: String,
    pub level: String,
    pub coach: String,
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub start_date_label: String,
    pub duration_days: u32,
    pub timeline: Timeline,
    pub status: ProgramStatus,
    pub remaining_label: String,
}

impl ProgramSummaryResponse {
    pub fn new(program: &Program, timeline: Timeline) -> Self {
        Self {
            id: program.id.to_string(),
            title: program.title.clone(),
            goal: program.goal.clone(),
            level: program.level.clone(),
            coach: program.coach.clone(),
            tags: program.tags.clone(),
            start_date: program.start_date,
            start_date_label: format_date(program.start_date),
            duration_days: program.duration_days,
            timeline,
            status: timeline.status(),
            remaining_label: timeline.remaining_label(),
        }
    }
}

/// One weekday cell of a day selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCellResponse {
    pub day: WeekdayKey,
    pub label: String,
    pub cell: DayCell,
    pub selectable: bool,
}

impl DayCellResponse {
    /// Cells for a read-only view, where only days with a plan can be opened
    pub fn viewer_cells<P: DayContent>(week: &WeekPlan<P>) -> Vec<Self> {
        Self::cells(week, |day| week.is_selectable(day))
    }

    /// Cells for an editor, where any non-rest day can be opened
    pub fn editor_cells<P: DayContent>(week: &WeekPlan<P>) -> Vec<Self> {
        Self::cells(week, |day| week.select_day(day).is_ok())
    }

    fn cells<P: DayContent>(
        week: &WeekPlan<P>,
        selectable: impl Fn(WeekdayKey) -> bool,
    ) -> Vec<Self> {
        WeekdayKey::ALL
            .into_iter()
            .map(|day| Self {
                day,
                label: day.label().to_string(),
                cell: week.cell(day),
                selectable: selectable(day),
            })
            .collect()
    }
}

/// Program detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramDetailResponse {
    #[serde(flatten)]
    pub summary: ProgramSummaryResponse,
    pub today: WeekdayKey,
    /// `None` when no day of the week is selectable
    pub default_day: Option<WeekdayKey>,
    pub schedule: Schedule,
    pub days: Vec<DayCellResponse>,
}

/// Plan for one selectable day of a program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlanResponse {
    pub program_id: String,
    pub day: WeekdayKey,
    pub label: String,
    pub plan: DayPlan,
}

/// Query for a program rest-day toggle; `selected` defaults to today
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestToggleQuery {
    pub selected: Option<String>,
}

/// Outcome of a rest-day toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestToggleResponse {
    pub day: WeekdayKey,
    pub is_rest: bool,
    pub selected_day: WeekdayKey,
    pub message: String,
}

// ============================================================================
// Student plans
// ============================================================================

/// Student list query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentListQuery {
    #[serde(default)]
    pub status: StudentStatus,
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Create student plan request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    pub phone: String,
    #[validate(length(min = 1, max = 200))]
    pub plan_title: String,
    pub plan_type: PlanType,
    #[serde(default)]
    pub rest_days: BTreeSet<WeekdayKey>,
}

/// Save one day of a student's plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SaveDayRequest {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub workout_steps: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub nutrition_items: Vec<String>,
    #[validate(range(max = 20000))]
    pub calories_target: Option<u32>,
    pub protein_target: Option<String>,
}

impl From<SaveDayRequest> for DayEntry {
    fn from(req: SaveDayRequest) -> Self {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        };

        DayEntry {
            workout_steps: clean(req.workout_steps),
            nutrition_items: clean(req.nutrition_items),
            calories_target: req.calories_target,
            protein_target: req
                .protein_target
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        }
    }
}

/// Student plan with its day selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentPlanResponse {
    #[serde(flatten)]
    pub plan: StudentPlan,
    pub days: Vec<DayCellResponse>,
}

/// Outcome of a status toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentStatusResponse {
    pub student_id: String,
    pub status: StudentStatus,
}
