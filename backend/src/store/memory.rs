//! In-memory store for development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use shared::{Expense, ExpenseInput, Profile, Trip, TripInput};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Account, DeletionProgress, Store};
use crate::error::{AppError, AppResult};

#[derive(Default)]
struct Tables {
    accounts: HashMap<Uuid, Account>,
    profiles: HashMap<Uuid, Profile>,
    trips: HashMap<Uuid, Trip>,
    expenses: HashMap<Uuid, Expense>,
    deletions: HashMap<Uuid, DeletionProgress>,
}

impl Tables {
    fn owns_trip(&self, user_id: Uuid, trip_id: Uuid) -> bool {
        self.trips
            .get(&trip_id)
            .map(|t| t.user_id == user_id)
            .unwrap_or(false)
    }
}

/// Store backed by hash maps behind a single lock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn build_trip(id: Uuid, user_id: Uuid, input: &TripInput, created_at: chrono::DateTime<Utc>) -> Trip {
    Trip {
        id,
        user_id,
        title: input.title.trim().to_string(),
        start_date: input.start_date,
        end_date: input.end_date,
        budget: input.budget,
        destination: input.destination.clone(),
        memo: input.memo.clone().unwrap_or_default(),
        created_at,
        updated_at: Utc::now(),
    }
}

fn build_expense(
    id: Uuid,
    trip_id: Uuid,
    input: &ExpenseInput,
    created_at: chrono::DateTime<Utc>,
) -> Expense {
    Expense {
        id,
        trip_id,
        title: input.title.trim().to_string(),
        amount: input.amount,
        category: input.category,
        date: input.date,
        memo: input.memo.clone(),
        created_at,
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn create_account(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Account> {
        let mut tables = self.tables.write().await;
        if tables.accounts.values().any(|a| a.email == email) {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_account_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_account(&self, id: Uuid) -> AppResult<Option<Account>> {
        Ok(self.tables.read().await.accounts.get(&id).cloned())
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        self.tables.write().await.accounts.remove(&id);
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.tables.read().await.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
    ) -> AppResult<Profile> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let profile = tables
            .profiles
            .entry(user_id)
            .and_modify(|p| {
                p.username = username.to_string();
                p.email = email.to_string();
                p.updated_at = now;
            })
            .or_insert_with(|| Profile {
                id: user_id,
                username: username.to_string(),
                email: email.to_string(),
                created_at: now,
                updated_at: now,
            });
        Ok(profile.clone())
    }

    async fn delete_profile(&self, user_id: Uuid) -> AppResult<()> {
        self.tables.write().await.profiles.remove(&user_id);
        Ok(())
    }

    async fn list_trips(&self, user_id: Uuid) -> AppResult<Vec<Trip>> {
        let tables = self.tables.read().await;
        let mut trips: Vec<Trip> = tables
            .trips
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        trips.sort_by_key(|t| (t.start_date, t.created_at, t.id));
        Ok(trips)
    }

    async fn get_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<Option<Trip>> {
        let tables = self.tables.read().await;
        Ok(tables
            .trips
            .get(&trip_id)
            .filter(|t| t.user_id == user_id)
            .cloned())
    }

    async fn insert_trip(&self, user_id: Uuid, input: &TripInput) -> AppResult<Trip> {
        let trip = build_trip(Uuid::new_v4(), user_id, input, Utc::now());
        self.tables.write().await.trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    async fn update_trip(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        input: &TripInput,
    ) -> AppResult<Option<Trip>> {
        let mut tables = self.tables.write().await;
        let Some(existing) = tables.trips.get_mut(&trip_id).filter(|t| t.user_id == user_id) else {
            return Ok(None);
        };
        *existing = build_trip(trip_id, user_id, input, existing.created_at);
        Ok(Some(existing.clone()))
    }

    async fn delete_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.owns_trip(user_id, trip_id) {
            return Ok(false);
        }
        tables.expenses.retain(|_, e| e.trip_id != trip_id);
        tables.trips.remove(&trip_id);
        Ok(true)
    }

    async fn delete_trips_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.trips.len();
        tables.trips.retain(|_, t| t.user_id != user_id);
        Ok((before - tables.trips.len()) as u64)
    }

    async fn list_expenses(&self, trip_id: Uuid) -> AppResult<Vec<Expense>> {
        let tables = self.tables.read().await;
        let mut expenses: Vec<Expense> = tables
            .expenses
            .values()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect();
        expenses.sort_by_key(|e| (e.date, e.created_at, e.id));
        Ok(expenses)
    }

    async fn get_expense(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<Option<Expense>> {
        let tables = self.tables.read().await;
        Ok(tables
            .expenses
            .get(&expense_id)
            .filter(|e| e.trip_id == trip_id)
            .cloned())
    }

    async fn insert_expense(&self, trip_id: Uuid, input: &ExpenseInput) -> AppResult<Expense> {
        let mut tables = self.tables.write().await;
        if !tables.trips.contains_key(&trip_id) {
            return Err(AppError::NotFound("Trip".to_string()));
        }
        let expense = build_expense(Uuid::new_v4(), trip_id, input, Utc::now());
        tables.expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn update_expense(
        &self,
        trip_id: Uuid,
        expense_id: Uuid,
        input: &ExpenseInput,
    ) -> AppResult<Option<Expense>> {
        let mut tables = self.tables.write().await;
        let Some(existing) = tables
            .expenses
            .get_mut(&expense_id)
            .filter(|e| e.trip_id == trip_id)
        else {
            return Ok(None);
        };
        *existing = build_expense(expense_id, trip_id, input, existing.created_at);
        Ok(Some(existing.clone()))
    }

    async fn delete_expense(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .expenses
            .get(&expense_id)
            .map(|e| e.trip_id == trip_id)
            .unwrap_or(false);
        if owned {
            tables.expenses.remove(&expense_id);
        }
        Ok(owned)
    }

    async fn delete_expenses_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        let Tables {
            trips, expenses, ..
        } = &mut *tables;
        let before = expenses.len();
        expenses.retain(|_, e| {
            trips
                .get(&e.trip_id)
                .map(|t| t.user_id != user_id)
                .unwrap_or(true)
        });
        Ok((before - expenses.len()) as u64)
    }

    async fn load_deletion(&self, user_id: Uuid) -> AppResult<Option<DeletionProgress>> {
        Ok(self.tables.read().await.deletions.get(&user_id).cloned())
    }

    async fn save_deletion(&self, progress: &DeletionProgress) -> AppResult<()> {
        self.tables
            .write()
            .await
            .deletions
            .insert(progress.user_id, progress.clone());
        Ok(())
    }

    async fn clear_deletion(&self, user_id: Uuid) -> AppResult<()> {
        self.tables.write().await.deletions.remove(&user_id);
        Ok(())
    }
}
