//! Account deletion as a resumable sequence of steps
//!
//! Each step is idempotent and progress is recorded after every step, so a
//! run that fails midway can be repeated and continues where it stopped.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::store::{DeletionProgress, DeletionStep, Store};

/// Outcome of a completed deletion
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeletionReport {
    pub user_id: Uuid,
    /// Step the run started from when an earlier run had failed
    pub resumed_from: Option<DeletionStep>,
    /// Steps executed by this run, in order
    pub completed_steps: Vec<DeletionStep>,
}

#[derive(Clone)]
pub struct AccountDeletionService {
    store: Arc<dyn Store>,
}

impl AccountDeletionService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Delete everything owned by the user, then the account itself
    pub async fn delete_account(&self, user_id: Uuid) -> AppResult<DeletionReport> {
        let now = Utc::now();
        let saved = self.store.load_deletion(user_id).await?;
        let resumed_from = saved.as_ref().map(|p| p.next_step);

        let mut progress = saved.unwrap_or(DeletionProgress {
            user_id,
            next_step: DeletionStep::DeleteExpenses,
            started_at: now,
            updated_at: now,
        });

        if let Some(step) = resumed_from {
            tracing::info!(%user_id, %step, "Resuming account deletion");
        }

        let mut completed_steps = Vec::new();
        let start = progress.next_step;
        let pending = DeletionStep::ALL
            .into_iter()
            .filter(move |step| *step >= start);

        for step in pending {
            progress.next_step = step;
            progress.updated_at = Utc::now();
            self.store.save_deletion(&progress).await?;

            if let Err(e) = self.run_step(user_id, step).await {
                tracing::error!(%user_id, %step, error = %e, "Account deletion step failed");
                return Err(e);
            }
            completed_steps.push(step);
        }

        self.store.clear_deletion(user_id).await?;
        tracing::info!(%user_id, "Account deleted");

        Ok(DeletionReport {
            user_id,
            resumed_from,
            completed_steps,
        })
    }

    async fn run_step(&self, user_id: Uuid, step: DeletionStep) -> AppResult<()> {
        match step {
            DeletionStep::DeleteExpenses => {
                let n = self.store.delete_expenses_for_user(user_id).await?;
                tracing::debug!(%user_id, deleted = n, "Expenses deleted");
            }
            DeletionStep::DeleteTrips => {
                let n = self.store.delete_trips_for_user(user_id).await?;
                tracing::debug!(%user_id, deleted = n, "Trips deleted");
            }
            DeletionStep::DeleteProfile => self.store.delete_profile(user_id).await?,
            DeletionStep::DeleteAccount => self.store.delete_account(user_id).await?,
        }
        Ok(())
    }
}
