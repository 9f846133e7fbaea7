//! Profile handlers

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use shared::ProfileInput;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::ProfileService;
use crate::AppState;

/// Get the current user's profile, creating it on first access
pub async fn get_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Value>> {
    let service = ProfileService::new(state.store);
    let profile = service.get_or_create(&current_user.0).await?;
    Ok(Json(json!({ "profile": profile })))
}

/// Update username and email
pub async fn update_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Json(input), _): WithRejection<Json<ProfileInput>, AppError>,
) -> AppResult<Json<Value>> {
    let service = ProfileService::new(state.store);
    let profile = service.update(&current_user.0, input).await?;
    Ok(Json(json!({ "profile": profile })))
}
