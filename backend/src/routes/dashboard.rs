//! Dashboard routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fittrack_shared::types::DashboardResponse;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET /api/v1/dashboard - aggregated view for the authenticated user
///
/// Computed on demand; nothing is cached.
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let dashboard = DashboardService::get_dashboard(&state.db, auth.user_id).await?;
    Ok(Json(dashboard))
}
