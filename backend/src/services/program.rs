//! Program service
//!
//! Provides business logic for:
//! - Listing programs with their timelines, filtered and paginated
//! - Program detail with today's default day and per-day selectability
//! - Resolving the plan for a chosen weekday
//! - Creating programs and toggling their rest days

use crate::error::ApiError;
use crate::repositories::ProgramStore;
use chrono::{DateTime, Utc};
use fitpro_shared::timeline::{parse_duration_days, parse_start_date};
use fitpro_shared::types::{
    CreateProgramRequest, DayCellResponse, DayPlanResponse, PaginatedResponse,
    ProgramDetailResponse, ProgramListQuery, ProgramSummaryResponse, RestToggleResponse,
};
use fitpro_shared::validation::{validate_day_plan, validate_not_blank};
use fitpro_shared::{paginate, Program, ScheduleError, WeekPlan, WeekdayKey};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

/// Program service
pub struct ProgramService;

impl ProgramService {
    /// List programs, newest start first
    pub async fn list_programs(
        store: &dyn ProgramStore,
        query: &ProgramListQuery,
        default_per_page: u32,
        now: DateTime<Utc>,
    ) -> Result<PaginatedResponse<ProgramSummaryResponse>, ApiError> {
        let mut programs = store.list().await.map_err(ApiError::Internal)?;
        programs.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.title.cmp(&b.title))
        });

        let summaries: Vec<_> = programs
            .iter()
            .map(|program| (program, program.timeline(now)))
            .filter(|(_, timeline)| query.filter.matches(timeline))
            .map(|(program, timeline)| ProgramSummaryResponse::new(program, timeline))
            .collect();

        Ok(paginate(
            summaries,
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(default_per_page),
        ))
    }

    pub async fn get_program(store: &dyn ProgramStore, id: Uuid) -> Result<Program, ApiError> {
        store
            .load(id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Program not found".to_string()))
    }

    /// Program detail as of `now`, opening on `today` when it has a plan
    pub async fn get_program_detail(
        store: &dyn ProgramStore,
        id: Uuid,
        now: DateTime<Utc>,
        today: WeekdayKey,
    ) -> Result<ProgramDetailResponse, ApiError> {
        let program = Self::get_program(store, id).await?;
        let timeline = program.timeline(now);

        metrics::counter!("fitpro_program_views_total").increment(1);
        debug!(program_id = %id, status = ?timeline.status(), "Program viewed");

        Ok(ProgramDetailResponse {
            summary: ProgramSummaryResponse::new(&program, timeline),
            today,
            default_day: program.week.default_day(today),
            schedule: program.week.schedule.clone(),
            days: DayCellResponse::viewer_cells(&program.week),
        })
    }

    /// Plan for a day; rest days and days without content are rejected
    pub async fn get_day_plan(
        store: &dyn ProgramStore,
        id: Uuid,
        day: WeekdayKey,
    ) -> Result<DayPlanResponse, ApiError> {
        let program = Self::get_program(store, id).await?;
        let plan = program.week.resolve(day)?;

        Ok(DayPlanResponse {
            program_id: program.id.to_string(),
            day,
            label: day.label().to_string(),
            plan: plan.clone(),
        })
    }

    /// Create a program from a coach-submitted request
    pub async fn create_program(
        store: &dyn ProgramStore,
        request: CreateProgramRequest,
    ) -> Result<Program, ApiError> {
        request.validate()?;
        validate_not_blank(&request.title, "Title").map_err(|message| ApiError::InvalidField {
            field: "title",
            message,
        })?;

        let start_date = parse_start_date(&request.start_date)?;
        let duration_days = parse_duration_days(request.duration_days)?;
        request.schedule.validate()?;
        if request.schedule.non_rest_days().next().is_none() {
            return Err(ApiError::InvalidField {
                field: "schedule",
                message: ScheduleError::LastActiveDay.to_string(),
            });
        }

        let mut week = WeekPlan::new(request.schedule, request.plan_by_day);
        for (day, plan) in &week.plan_by_day {
            if week.schedule.is_rest_day(*day) {
                return Err(ScheduleError::RestDay(*day).into());
            }
            validate_day_plan(plan)
                .map_err(|msg| ApiError::Validation(format!("{}: {}", day.label(), msg)))?;
        }
        let planned: Vec<WeekdayKey> = week.plan_by_day.keys().copied().collect();
        week.schedule.weekly.extend(planned);

        let program = Program {
            id: Uuid::new_v4(),
            title: request.title.trim().to_string(),
            goal: request.goal,
            level: request.level,
            coach: request.coach,
            tags: request.tags,
            start_date,
            duration_days,
            week,
        };

        store.save(&program).await.map_err(ApiError::Internal)?;
        info!(program_id = %program.id, title = %program.title, "Program created");

        Ok(program)
    }

    pub async fn delete_program(store: &dyn ProgramStore, id: Uuid) -> Result<(), ApiError> {
        let deleted = store.delete(id).await.map_err(ApiError::Internal)?;
        if !deleted {
            return Err(ApiError::NotFound("Program not found".to_string()));
        }
        info!(program_id = %id, "Program deleted");
        Ok(())
    }

    /// Flip a weekday between rest and active.
    ///
    /// `selected` is the day the caller is currently looking at; when it ends
    /// up on a rest day the first non-rest day is returned instead.
    pub async fn toggle_rest_day(
        store: &dyn ProgramStore,
        id: Uuid,
        day: WeekdayKey,
        selected: WeekdayKey,
    ) -> Result<RestToggleResponse, ApiError> {
        let mut program = Self::get_program(store, id).await?;

        let toggle = match program.week.toggle_rest_day(day, selected) {
            Ok(toggle) => toggle,
            Err(err) => {
                metrics::counter!("fitpro_rest_toggles_rejected_total", "target" => "program")
                    .increment(1);
                warn!(program_id = %id, day = %day, error = %err, "Rest day toggle rejected");
                return Err(err.into());
            }
        };

        store.save(&program).await.map_err(ApiError::Internal)?;
        metrics::counter!("fitpro_rest_toggles_total", "target" => "program").increment(1);
        info!(program_id = %id, day = %day, is_rest = toggle.is_rest, "Rest day toggled");

        Ok(super::rest_toggle_response(toggle))
    }
}
