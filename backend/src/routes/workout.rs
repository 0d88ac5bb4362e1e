//! Workout routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fittrack_shared::types::{
    CreateWorkoutRequest, WorkoutRangeQuery, WorkoutResponse, WorkoutSummaryResponse,
};
use uuid::Uuid;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_workout).get(get_workouts))
        .route("/range", get(get_workouts_by_range))
        .route("/:id", get(get_workout))
        .route("/:id/complete", post(complete_workout))
}

/// POST /api/v1/workouts - start a new workout
///
/// Resolves every exercise reference before writing; an unknown id fails
/// with 404 and persists nothing.
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutService::create_workout(&state.db, auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts - all workouts for the authenticated user
async fn get_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<WorkoutSummaryResponse>>> {
    let workouts = WorkoutService::get_user_workouts(&state.db, auth.user_id).await?;
    Ok(Json(workouts))
}

/// GET /api/v1/workouts/range?start=..&end=.. - workouts created in a range
async fn get_workouts_by_range(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WorkoutRangeQuery>,
) -> ApiResult<Json<Vec<WorkoutSummaryResponse>>> {
    let workouts =
        WorkoutService::get_workouts_by_date_range(&state.db, auth.user_id, query.start, query.end)
            .await?;
    Ok(Json(workouts))
}

/// GET /api/v1/workouts/:id
async fn get_workout(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::get_workout(&state.db, id).await?;
    Ok(Json(workout))
}

/// POST /api/v1/workouts/:id/complete - mark a workout as done
async fn complete_workout(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::complete_workout(&state.db, id).await?;
    Ok(Json(workout))
}
