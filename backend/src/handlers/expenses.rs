//! Expense HTTP handlers, nested under a trip

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use shared::{Expense, ExpenseInput};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::ExpenseService;
use crate::AppState;

pub async fn list_expenses(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<Value>> {
    let service = ExpenseService::new(state.store);
    let expenses = service
        .list_expenses(current_user.0.user_id, trip_id)
        .await?;
    Ok(Json(json!({ "expenses": expenses })))
}

pub async fn get_expense(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path((trip_id, expense_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
) -> AppResult<Json<Expense>> {
    let service = ExpenseService::new(state.store);
    let expense = service
        .get_expense(current_user.0.user_id, trip_id, expense_id)
        .await?;
    Ok(Json(expense))
}

pub async fn create_expense(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<ExpenseInput>, AppError>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let service = ExpenseService::new(state.store);
    let expense = service
        .create_expense(current_user.0.user_id, trip_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn update_expense(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path((trip_id, expense_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<ExpenseInput>, AppError>,
) -> AppResult<Json<Expense>> {
    let service = ExpenseService::new(state.store);
    let expense = service
        .update_expense(current_user.0.user_id, trip_id, expense_id, input)
        .await?;
    Ok(Json(expense))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path((trip_id, expense_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
) -> AppResult<StatusCode> {
    let service = ExpenseService::new(state.store);
    service
        .delete_expense(current_user.0.user_id, trip_id, expense_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
