//! Student plan service
//!
//! Backs the coach's student editor: one weekly plan per student, where any
//! non-rest day can be selected and authored.

use crate::error::ApiError;
use crate::repositories::StudentPlanStore;
use chrono::{DateTime, Utc};
use fitpro_shared::listing::student_matches;
use fitpro_shared::types::{
    CreateStudentRequest, DayCellResponse, PaginatedResponse, RestToggleResponse,
    SaveDayRequest, StudentListQuery, StudentPlanResponse, StudentStatusResponse,
};
use fitpro_shared::validation::{validate_day_entry, validate_not_blank, validate_phone};
use fitpro_shared::{
    paginate, DayEntry, Schedule, ScheduleError, StudentPlan, StudentStatus, WeekPlan, WeekdayKey,
};
use std::collections::BTreeMap;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// Student plan service
pub struct StudentPlanService;

impl StudentPlanService {
    /// List plans on one status tab, optionally narrowed by a search query
    pub async fn list_students(
        store: &dyn StudentPlanStore,
        query: &StudentListQuery,
        default_per_page: u32,
    ) -> Result<PaginatedResponse<StudentPlanResponse>, ApiError> {
        let mut plans = store.list().await.map_err(ApiError::Internal)?;
        plans.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        let matching: Vec<_> = plans
            .into_iter()
            .filter(|plan| student_matches(plan, query.status, &query.q))
            .map(to_response)
            .collect();

        Ok(paginate(
            matching,
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(default_per_page),
        ))
    }

    pub async fn get_plan(
        store: &dyn StudentPlanStore,
        student_id: Uuid,
    ) -> Result<StudentPlan, ApiError> {
        store
            .load(student_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))
    }

    pub async fn get_student(
        store: &dyn StudentPlanStore,
        student_id: Uuid,
    ) -> Result<StudentPlanResponse, ApiError> {
        Self::get_plan(store, student_id).await.map(to_response)
    }

    /// Register a student; every day not listed as rest becomes a training day
    pub async fn create_student(
        store: &dyn StudentPlanStore,
        request: CreateStudentRequest,
        now: DateTime<Utc>,
    ) -> Result<StudentPlanResponse, ApiError> {
        request.validate()?;
        for (field, value, what) in [
            ("full_name", &request.full_name, "Full name"),
            ("plan_title", &request.plan_title, "Plan title"),
        ] {
            validate_not_blank(value, what)
                .map_err(|message| ApiError::InvalidField { field, message })?;
        }
        let phone = request.phone.trim().to_string();
        validate_phone(&phone).map_err(|message| ApiError::InvalidField {
            field: "phone",
            message,
        })?;

        let schedule = Schedule {
            weekly: WeekdayKey::ALL
                .into_iter()
                .filter(|day| !request.rest_days.contains(day))
                .collect(),
            rest_days: request.rest_days,
        };
        let selected_day = schedule
            .non_rest_days()
            .next()
            .ok_or_else(|| ApiError::InvalidField {
                field: "rest_days",
                message: ScheduleError::LastActiveDay.to_string(),
            })?;

        let plan = StudentPlan {
            student_id: Uuid::new_v4(),
            full_name: request.full_name.trim().to_string(),
            phone,
            plan_title: request.plan_title.trim().to_string(),
            plan_type: request.plan_type,
            status: StudentStatus::Pending,
            selected_day,
            week: WeekPlan::new(schedule, BTreeMap::new()),
            updated_at: now,
        };

        store.save(&plan).await.map_err(ApiError::Internal)?;
        info!(student_id = %plan.student_id, "Student plan created");

        Ok(to_response(plan))
    }

    /// Flip a weekday between rest and active, moving the selection off a rest day
    pub async fn toggle_rest_day(
        store: &dyn StudentPlanStore,
        student_id: Uuid,
        day: WeekdayKey,
        now: DateTime<Utc>,
    ) -> Result<RestToggleResponse, ApiError> {
        let mut plan = Self::get_plan(store, student_id).await?;

        let toggle = match plan.week.toggle_rest_day(day, plan.selected_day) {
            Ok(toggle) => toggle,
            Err(err) => {
                metrics::counter!("fitpro_rest_toggles_rejected_total", "target" => "student")
                    .increment(1);
                warn!(student_id = %student_id, day = %day, error = %err, "Rest day toggle rejected");
                return Err(err.into());
            }
        };

        plan.selected_day = toggle.selected_day;
        plan.updated_at = now;
        store.save(&plan).await.map_err(ApiError::Internal)?;

        metrics::counter!("fitpro_rest_toggles_total", "target" => "student").increment(1);
        info!(student_id = %student_id, day = %day, is_rest = toggle.is_rest, "Rest day toggled");

        Ok(super::rest_toggle_response(toggle))
    }

    /// Store the coach's content for a non-rest day
    pub async fn save_day(
        store: &dyn StudentPlanStore,
        student_id: Uuid,
        day: WeekdayKey,
        request: SaveDayRequest,
        now: DateTime<Utc>,
    ) -> Result<StudentPlanResponse, ApiError> {
        request.validate()?;
        let entry = DayEntry::from(request);
        validate_day_entry(&entry).map_err(ApiError::Validation)?;

        let mut plan = Self::get_plan(store, student_id).await?;
        plan.week.set_day(day, entry)?;
        plan.selected_day = day;
        plan.updated_at = now;

        store.save(&plan).await.map_err(ApiError::Internal)?;
        info!(student_id = %student_id, day = %day, "Student day saved");

        Ok(to_response(plan))
    }

    pub async fn select_day(
        store: &dyn StudentPlanStore,
        student_id: Uuid,
        day: WeekdayKey,
        now: DateTime<Utc>,
    ) -> Result<StudentPlanResponse, ApiError> {
        let mut plan = Self::get_plan(store, student_id).await?;
        plan.selected_day = plan.week.select_day(day)?;
        plan.updated_at = now;

        store.save(&plan).await.map_err(ApiError::Internal)?;
        Ok(to_response(plan))
    }

    /// Move a student between the pending and active tabs
    pub async fn toggle_status(
        store: &dyn StudentPlanStore,
        student_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<StudentStatusResponse, ApiError> {
        let mut plan = Self::get_plan(store, student_id).await?;
        plan.status = plan.status.toggled();
        plan.updated_at = now;

        store.save(&plan).await.map_err(ApiError::Internal)?;
        info!(student_id = %student_id, status = ?plan.status, "Student status changed");

        Ok(StudentStatusResponse {
            student_id: student_id.to_string(),
            status: plan.status,
        })
    }
}

fn to_response(plan: StudentPlan) -> StudentPlanResponse {
    let days = DayCellResponse::editor_cells(&plan.week);
    StudentPlanResponse { plan, days }
}
