//! Daily activity log routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ActivityLogService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use fittrack_shared::types::{
    ActivityLogResponse, ActivityRangeQuery, LogActivityRequest, UpdateActivityLogRequest,
};
use uuid::Uuid;

/// Create activity log routes
pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_activity).get(get_logs))
        .route("/date/:date", get(get_log_by_date))
        .route("/range", get(get_logs_by_range))
        .route("/:id", put(update_log))
}

/// POST /api/v1/activity - log (or overlay) a day's metrics
async fn log_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogActivityRequest>,
) -> ApiResult<(StatusCode, Json<ActivityLogResponse>)> {
    let log = ActivityLogService::log_activity(&state.db, auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/activity - all logs for the authenticated user
async fn get_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ActivityLogResponse>>> {
    let logs = ActivityLogService::get_user_logs(&state.db, auth.user_id).await?;
    Ok(Json(logs))
}

/// GET /api/v1/activity/date/:date - the log for one calendar day
async fn get_log_by_date(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(date): Path<NaiveDate>,
) -> ApiResult<Json<ActivityLogResponse>> {
    let log = ActivityLogService::get_log_by_date(&state.db, auth.user_id, date)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No activity log for {}", date)))?;
    Ok(Json(log))
}

/// GET /api/v1/activity/range?start=..&end=.. - logs in an inclusive range
async fn get_logs_by_range(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ActivityRangeQuery>,
) -> ApiResult<Json<Vec<ActivityLogResponse>>> {
    let logs =
        ActivityLogService::get_logs_by_date_range(&state.db, auth.user_id, query.start, query.end)
            .await?;
    Ok(Json(logs))
}

/// PUT /api/v1/activity/:id - sparse update of a log
async fn update_log(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateActivityLogRequest>,
) -> ApiResult<Json<ActivityLogResponse>> {
    let log = ActivityLogService::update_log(&state.db, id, req).await?;
    Ok(Json(log))
}
