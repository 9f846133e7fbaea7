//! Persistence layer
//!
//! Services talk to a [`Store`]; PostgreSQL backs production and an
//! in-memory implementation serves development and tests.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{Expense, ExpenseInput, Profile, Trip, TripInput};
use uuid::Uuid;

use crate::error::AppResult;

/// Login credentials and signup metadata
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    /// Username given at signup, used when a profile has to be created later
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Steps of the account deletion saga, in execution order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStep {
    DeleteExpenses,
    DeleteTrips,
    DeleteProfile,
    DeleteAccount,
}

impl DeletionStep {
    pub const ALL: [DeletionStep; 4] = [
        DeletionStep::DeleteExpenses,
        DeletionStep::DeleteTrips,
        DeletionStep::DeleteProfile,
        DeletionStep::DeleteAccount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionStep::DeleteExpenses => "delete_expenses",
            DeletionStep::DeleteTrips => "delete_trips",
            DeletionStep::DeleteProfile => "delete_profile",
            DeletionStep::DeleteAccount => "delete_account",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.as_str() == s)
    }
}

impl std::fmt::Display for DeletionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted progress of an account deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionProgress {
    pub user_id: Uuid,
    /// First step that has not completed yet
    pub next_step: DeletionStep,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage operations used by the services.
///
/// Trip lookups are always scoped to the owning user; expense lookups are
/// scoped to a trip whose ownership the caller has already checked.
#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap connectivity check
    async fn ping(&self) -> AppResult<()>;

    // Accounts
    async fn create_account(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Account>;
    async fn find_account_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    async fn find_account(&self, id: Uuid) -> AppResult<Option<Account>>;
    /// Idempotent: deleting a missing account succeeds
    async fn delete_account(&self, id: Uuid) -> AppResult<()>;

    // Profiles
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;
    async fn upsert_profile(&self, user_id: Uuid, username: &str, email: &str)
        -> AppResult<Profile>;
    async fn delete_profile(&self, user_id: Uuid) -> AppResult<()>;

    // Trips
    /// Trips of a user, earliest start date first
    async fn list_trips(&self, user_id: Uuid) -> AppResult<Vec<Trip>>;
    async fn get_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<Option<Trip>>;
    async fn insert_trip(&self, user_id: Uuid, input: &TripInput) -> AppResult<Trip>;
    async fn update_trip(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        input: &TripInput,
    ) -> AppResult<Option<Trip>>;
    /// Deletes the trip and its expenses atomically; `false` when no such trip
    async fn delete_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<bool>;
    async fn delete_trips_for_user(&self, user_id: Uuid) -> AppResult<u64>;

    // Expenses
    /// Expenses of a trip, by date then creation time
    async fn list_expenses(&self, trip_id: Uuid) -> AppResult<Vec<Expense>>;
    async fn get_expense(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<Option<Expense>>;
    async fn insert_expense(&self, trip_id: Uuid, input: &ExpenseInput) -> AppResult<Expense>;
    async fn update_expense(
        &self,
        trip_id: Uuid,
        expense_id: Uuid,
        input: &ExpenseInput,
    ) -> AppResult<Option<Expense>>;
    async fn delete_expense(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<bool>;
    /// Deletes the expenses of every trip the user owns
    async fn delete_expenses_for_user(&self, user_id: Uuid) -> AppResult<u64>;

    // Account deletion progress
    async fn load_deletion(&self, user_id: Uuid) -> AppResult<Option<DeletionProgress>>;
    async fn save_deletion(&self, progress: &DeletionProgress) -> AppResult<()>;
    async fn clear_deletion(&self, user_id: Uuid) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_steps_round_trip() {
        for step in DeletionStep::ALL {
            assert_eq!(DeletionStep::from_str(step.as_str()), Some(step));
        }
        assert_eq!(DeletionStep::from_str("delete_everything"), None);
    }

    #[test]
    fn test_deletion_steps_ordered() {
        let mut sorted = DeletionStep::ALL;
        sorted.sort();
        assert_eq!(sorted, DeletionStep::ALL);
    }
}
