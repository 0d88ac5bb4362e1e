//! Exercise catalog routes
//!
//! Reads are open to any authenticated user; create/update/delete require
//! the ADMIN role.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ExerciseService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fittrack_shared::models::{ExerciseCategory, MuscleGroup};
use fittrack_shared::types::{CreateExerciseRequest, ExerciseResponse, UpdateExerciseRequest};
use serde::Deserialize;
use uuid::Uuid;

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route("/muscle-group/:group", get(list_by_muscle_group))
        .route("/category/:category", get(list_by_category))
        .route("/search", get(search_exercises))
        .route(
            "/:id",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
}

/// GET /api/v1/exercises - list the whole catalog
async fn list_exercises(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let exercises = ExerciseService::list_all(&state.db).await?;
    Ok(Json(exercises))
}

/// GET /api/v1/exercises/muscle-group/:group
async fn list_by_muscle_group(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(group): Path<String>,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let muscle_group: MuscleGroup = group
        .parse()
        .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::BadRequest(e.to_string()))?;

    let exercises = ExerciseService::list_by_muscle_group(&state.db, muscle_group).await?;
    Ok(Json(exercises))
}

/// GET /api/v1/exercises/category/:category
async fn list_by_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let category: ExerciseCategory = category
        .parse()
        .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::BadRequest(e.to_string()))?;

    let exercises = ExerciseService::list_by_category(&state.db, category).await?;
    Ok(Json(exercises))
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/v1/exercises/search?q=press
async fn search_exercises(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let exercises = ExerciseService::search(&state.db, &query.q).await?;
    Ok(Json(exercises))
}

/// GET /api/v1/exercises/:id
async fn get_exercise(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ExerciseResponse>> {
    let exercise = ExerciseService::get(&state.db, id).await?;
    Ok(Json(exercise))
}

/// POST /api/v1/exercises - create a catalog entry (admin only)
async fn create_exercise(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateExerciseRequest>,
) -> ApiResult<(StatusCode, Json<ExerciseResponse>)> {
    auth.require_admin()?;
    let exercise = ExerciseService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// PUT /api/v1/exercises/:id - full update (admin only)
async fn update_exercise(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    auth.require_admin()?;
    let exercise = ExerciseService::update(&state.db, id, req).await?;
    Ok(Json(exercise))
}

/// DELETE /api/v1/exercises/:id (admin only)
async fn delete_exercise(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    auth.require_admin()?;
    ExerciseService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
