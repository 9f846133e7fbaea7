//! Account handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::account_deletion::DeletionReport;
use crate::services::AccountDeletionService;
use crate::AppState;

/// Delete the account and everything it owns; safe to repeat after a failure
pub async fn delete_account(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<DeletionReport>> {
    let service = AccountDeletionService::new(state.store);
    let report = service.delete_account(current_user.0.user_id).await?;
    Ok(Json(report))
}
