//! Trip management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use shared::{ExpenseSummary, Trip, TripInput};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::TripService;
use crate::AppState;

/// List all trips for the current user
pub async fn list_trips(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Value>> {
    let service = TripService::new(state.store);
    let trips = service.list_trips(current_user.0.user_id).await?;
    Ok(Json(json!({ "trips": trips })))
}

/// Get a specific trip
pub async fn get_trip(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<Trip>> {
    let service = TripService::new(state.store);
    let trip = service.get_trip(current_user.0.user_id, trip_id).await?;
    Ok(Json(trip))
}

/// Create a new trip
pub async fn create_trip(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Json(input), _): WithRejection<Json<TripInput>, AppError>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    let service = TripService::new(state.store);
    let trip = service.create_trip(current_user.0.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// Update a trip
pub async fn update_trip(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<TripInput>, AppError>,
) -> AppResult<Json<Trip>> {
    let service = TripService::new(state.store);
    let trip = service
        .update_trip(current_user.0.user_id, trip_id, input)
        .await?;
    Ok(Json(trip))
}

/// Delete a trip and its expenses
pub async fn delete_trip(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<StatusCode> {
    let service = TripService::new(state.store);
    service.delete_trip(current_user.0.user_id, trip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Expense totals by category and budget utilization
pub async fn get_trip_summary(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<ExpenseSummary>> {
    let service = TripService::new(state.store);
    let summary = service.get_summary(current_user.0.user_id, trip_id).await?;
    Ok(Json(summary))
}
