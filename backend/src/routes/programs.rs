//! Program API routes

use super::{parse_day, parse_id};
use crate::error::ApiError;
use crate::services::ProgramService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitpro_shared::types::{
    CreateProgramRequest, DayPlanResponse, PaginatedResponse, ProgramDetailResponse,
    ProgramListQuery, ProgramSummaryResponse, RestToggleQuery, RestToggleResponse,
};

/// Create program routes
pub fn program_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_programs).post(create_program))
        .route("/:id", get(get_program).delete(delete_program))
        .route("/:id/days/:day", get(get_day_plan))
        .route("/:id/rest-days/:day", post(toggle_rest_day))
}

/// GET /api/v1/programs - List programs with their timelines
async fn list_programs(
    State(state): State<AppState>,
    Query(query): Query<ProgramListQuery>,
) -> Result<Json<PaginatedResponse<ProgramSummaryResponse>>, ApiError> {
    let page = ProgramService::list_programs(
        state.programs(),
        &query,
        state.config().schedule.programs_page_size,
        state.now(),
    )
    .await?;

    Ok(Json(page))
}

/// POST /api/v1/programs - Create a program
async fn create_program(
    State(state): State<AppState>,
    Json(req): Json<CreateProgramRequest>,
) -> Result<(StatusCode, Json<ProgramSummaryResponse>), ApiError> {
    let program = ProgramService::create_program(state.programs(), req).await?;
    let summary = ProgramSummaryResponse::new(&program, program.timeline(state.now()));

    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/v1/programs/:id - Program detail as of now
async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgramDetailResponse>, ApiError> {
    let program_id = parse_id(&id, "program")?;

    let detail =
        ProgramService::get_program_detail(state.programs(), program_id, state.now(), state.today())
            .await?;

    Ok(Json(detail))
}

/// DELETE /api/v1/programs/:id - Delete a program
async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let program_id = parse_id(&id, "program")?;

    ProgramService::delete_program(state.programs(), program_id).await?;

    Ok(Json(serde_json::json!({"deleted": true})))
}

/// GET /api/v1/programs/:id/days/:day - Plan for one weekday
async fn get_day_plan(
    State(state): State<AppState>,
    Path((id, day)): Path<(String, String)>,
) -> Result<Json<DayPlanResponse>, ApiError> {
    let program_id = parse_id(&id, "program")?;
    let day = parse_day(&day)?;

    let plan = ProgramService::get_day_plan(state.programs(), program_id, day).await?;

    Ok(Json(plan))
}

/// POST /api/v1/programs/:id/rest-days/:day - Toggle a rest day
async fn toggle_rest_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(String, String)>,
    Query(query): Query<RestToggleQuery>,
) -> Result<Json<RestToggleResponse>, ApiError> {
    let program_id = parse_id(&id, "program")?;
    let day = parse_day(&day)?;
    let selected = match query.selected.as_deref() {
        Some(raw) => parse_day(raw)?,
        None => state.today(),
    };

    let toggle =
        ProgramService::toggle_rest_day(state.programs(), program_id, day, selected).await?;

    Ok(Json(toggle))
}
