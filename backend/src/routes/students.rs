//! Student plan API routes

use super::{parse_day, parse_id};
use crate::error::ApiError;
use crate::services::StudentPlanService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use fitpro_shared::types::{
    CreateStudentRequest, PaginatedResponse, RestToggleResponse, SaveDayRequest,
    StudentListQuery, StudentPlanResponse, StudentStatusResponse,
};

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/:id", get(get_student))
        .route("/:id/rest-days/:day", post(toggle_rest_day))
        .route("/:id/days/:day", put(save_day))
        .route("/:id/selected-day/:day", put(select_day))
        .route("/:id/status", post(toggle_status))
}

/// GET /api/v1/students - List students on a status tab
async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Result<Json<PaginatedResponse<StudentPlanResponse>>, ApiError> {
    let page = StudentPlanService::list_students(
        state.students(),
        &query,
        state.config().schedule.students_page_size,
    )
    .await?;

    Ok(Json(page))
}

/// POST /api/v1/students - Register a student plan
async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentPlanResponse>), ApiError> {
    let created = StudentPlanService::create_student(state.students(), req, state.now()).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/students/:id
async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentPlanResponse>, ApiError> {
    let student_id = parse_id(&id, "student")?;

    Ok(Json(
        StudentPlanService::get_student(state.students(), student_id).await?,
    ))
}

/// POST /api/v1/students/:id/rest-days/:day - Toggle a rest day
///
/// Returns 409 when the day is the last one left for training.
async fn toggle_rest_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(String, String)>,
) -> Result<Json<RestToggleResponse>, ApiError> {
    let student_id = parse_id(&id, "student")?;
    let day = parse_day(&day)?;

    let toggle =
        StudentPlanService::toggle_rest_day(state.students(), student_id, day, state.now())
            .await?;

    Ok(Json(toggle))
}

/// PUT /api/v1/students/:id/days/:day - Save a day's content
async fn save_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(String, String)>,
    Json(req): Json<SaveDayRequest>,
) -> Result<Json<StudentPlanResponse>, ApiError> {
    let student_id = parse_id(&id, "student")?;
    let day = parse_day(&day)?;

    let plan =
        StudentPlanService::save_day(state.students(), student_id, day, req, state.now()).await?;

    Ok(Json(plan))
}

/// PUT /api/v1/students/:id/selected-day/:day - Select a day in the editor
async fn select_day(
    State(state): State<AppState>,
    Path((id, day)): Path<(String, String)>,
) -> Result<Json<StudentPlanResponse>, ApiError> {
    let student_id = parse_id(&id, "student")?;
    let day = parse_day(&day)?;

    let plan =
        StudentPlanService::select_day(state.students(), student_id, day, state.now()).await?;

    Ok(Json(plan))
}

/// POST /api/v1/students/:id/status - Toggle pending / active
async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentStatusResponse>, ApiError> {
    let student_id = parse_id(&id, "student")?;

    let status =
        StudentPlanService::toggle_status(state.students(), student_id, state.now()).await?;

    Ok(Json(status))
}
