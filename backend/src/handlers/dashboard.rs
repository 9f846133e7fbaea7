//! Dashboard handler

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::dashboard::Dashboard;
use crate::services::DashboardService;
use crate::AppState;

/// Trips, the nearest upcoming trip, and its forecast
pub async fn get_dashboard(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Dashboard>> {
    let service = DashboardService::new(
        state.store,
        state.forecasts,
        state.config.app.utc_offset_seconds,
    );
    let dashboard = service
        .get_dashboard(current_user.0.user_id, Utc::now())
        .await?;
    Ok(Json(dashboard))
}
