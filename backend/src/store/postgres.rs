//! PostgreSQL store

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use shared::{Destination, Expense, ExpenseCategory, ExpenseInput, Profile, Trip, TripInput};
use sqlx::PgPool;
use uuid::Uuid;

use super::{Account, DeletionProgress, DeletionStep, Store};
use crate::error::{AppError, AppResult};

const TRIP_COLUMNS: &str = "id, user_id, title, start_date, end_date, budget, region, city_name, city_en, memo, created_at, updated_at";
const EXPENSE_COLUMNS: &str = "id, trip_id, title, amount, category, date, memo, created_at";

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TripRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    budget: i64,
    region: String,
    city_name: String,
    city_en: String,
    memo: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Trip {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            start_date: row.start_date,
            end_date: row.end_date,
            budget: row.budget,
            destination: Destination {
                region: row.region,
                city_name: row.city_name,
                city_en: row.city_en,
            },
            memo: row.memo,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExpenseRow {
    id: Uuid,
    trip_id: Uuid,
    title: String,
    amount: i64,
    category: String,
    date: NaiveDate,
    memo: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            trip_id: row.trip_id,
            title: row.title,
            amount: row.amount,
            // Rows written before the category set was closed may hold labels
            category: ExpenseCategory::parse_lenient(&row.category),
            date: row.date,
            memo: row.memo,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DeletionRow {
    user_id: Uuid,
    next_step: String,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DeletionRow> for DeletionProgress {
    type Error = AppError;

    fn try_from(row: DeletionRow) -> Result<Self, Self::Error> {
        let next_step = DeletionStep::from_str(&row.next_step).ok_or_else(|| {
            AppError::Internal(format!("Unknown deletion step: {}", row.next_step))
        })?;
        Ok(DeletionProgress {
            user_id: row.user_id,
            next_step,
            started_at: row.started_at,
            updated_at: row.updated_at,
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    async fn create_account(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, username, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEntry("email".to_string())
            } else {
                AppError::DatabaseError(e)
            }
        })
    }

    async fn find_account_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, username, password_hash, created_at FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(account)
    }

    async fn find_account(&self, id: Uuid) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, username, password_hash, created_at FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(account)
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, username, email, created_at, updated_at FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Profile::from))
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
    ) -> AppResult<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (id, username, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username, email = EXCLUDED.email, updated_at = NOW()
            RETURNING id, username, email, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(username)
        .bind(email)
        .fetch_one(&self.db)
        .await?;
        Ok(row.into())
    }

    async fn delete_profile(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn list_trips(&self, user_id: Uuid) -> AppResult<Vec<Trip>> {
        let rows = sqlx::query_as::<_, TripRow>(&format!(
            "SELECT {} FROM trips WHERE user_id = $1 ORDER BY start_date, created_at, id",
            TRIP_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(Trip::from).collect())
    }

    async fn get_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<Option<Trip>> {
        let row = sqlx::query_as::<_, TripRow>(&format!(
            "SELECT {} FROM trips WHERE id = $1 AND user_id = $2",
            TRIP_COLUMNS
        ))
        .bind(trip_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Trip::from))
    }

    async fn insert_trip(&self, user_id: Uuid, input: &TripInput) -> AppResult<Trip> {
        let row = sqlx::query_as::<_, TripRow>(&format!(
            r#"
            INSERT INTO trips (user_id, title, start_date, end_date, budget,
                               region, city_name, city_en, memo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            TRIP_COLUMNS
        ))
        .bind(user_id)
        .bind(input.title.trim())
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.budget)
        .bind(&input.destination.region)
        .bind(&input.destination.city_name)
        .bind(&input.destination.city_en)
        .bind(input.memo.as_deref().unwrap_or_default())
        .fetch_one(&self.db)
        .await?;
        Ok(row.into())
    }

    async fn update_trip(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        input: &TripInput,
    ) -> AppResult<Option<Trip>> {
        let row = sqlx::query_as::<_, TripRow>(&format!(
            r#"
            UPDATE trips
            SET title = $3, start_date = $4, end_date = $5, budget = $6,
                region = $7, city_name = $8, city_en = $9, memo = $10, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {}
            "#,
            TRIP_COLUMNS
        ))
        .bind(trip_id)
        .bind(user_id)
        .bind(input.title.trim())
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.budget)
        .bind(&input.destination.region)
        .bind(&input.destination.city_name)
        .bind(&input.destination.city_en)
        .bind(input.memo.as_deref().unwrap_or_default())
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Trip::from))
    }

    async fn delete_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<bool> {
        let mut tx = self.db.begin().await?;

        let owned = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM trips WHERE id = $1 AND user_id = $2",
        )
        .bind(trip_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        if owned == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM expenses WHERE trip_id = $1")
            .bind(trip_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM trips WHERE id = $1 AND user_id = $2")
            .bind(trip_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn delete_trips_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM trips WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_expenses(&self, trip_id: Uuid) -> AppResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, ExpenseRow>(&format!(
            "SELECT {} FROM expenses WHERE trip_id = $1 ORDER BY date, created_at, id",
            EXPENSE_COLUMNS
        ))
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn get_expense(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(&format!(
            "SELECT {} FROM expenses WHERE id = $1 AND trip_id = $2",
            EXPENSE_COLUMNS
        ))
        .bind(expense_id)
        .bind(trip_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Expense::from))
    }

    async fn insert_expense(&self, trip_id: Uuid, input: &ExpenseInput) -> AppResult<Expense> {
        let row = sqlx::query_as::<_, ExpenseRow>(&format!(
            r#"
            INSERT INTO expenses (trip_id, title, amount, category, date, memo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            EXPENSE_COLUMNS
        ))
        .bind(trip_id)
        .bind(input.title.trim())
        .bind(input.amount)
        .bind(input.category.as_str())
        .bind(input.date)
        .bind(&input.memo)
        .fetch_one(&self.db)
        .await?;
        Ok(row.into())
    }

    async fn update_expense(
        &self,
        trip_id: Uuid,
        expense_id: Uuid,
        input: &ExpenseInput,
    ) -> AppResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(&format!(
            r#"
            UPDATE expenses
            SET title = $3, amount = $4, category = $5, date = $6, memo = $7
            WHERE id = $1 AND trip_id = $2
            RETURNING {}
            "#,
            EXPENSE_COLUMNS
        ))
        .bind(expense_id)
        .bind(trip_id)
        .bind(input.title.trim())
        .bind(input.amount)
        .bind(input.category.as_str())
        .bind(input.date)
        .bind(&input.memo)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Expense::from))
    }

    async fn delete_expense(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND trip_id = $2")
            .bind(expense_id)
            .bind(trip_id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_expenses_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM expenses WHERE trip_id IN (SELECT id FROM trips WHERE user_id = $1)",
        )
        .bind(user_id)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected())
    }

    async fn load_deletion(&self, user_id: Uuid) -> AppResult<Option<DeletionProgress>> {
        let row = sqlx::query_as::<_, DeletionRow>(
            "SELECT user_id, next_step, started_at, updated_at FROM account_deletions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        row.map(DeletionProgress::try_from).transpose()
    }

    async fn save_deletion(&self, progress: &DeletionProgress) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO account_deletions (user_id, next_step, started_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET next_step = EXCLUDED.next_step, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(progress.user_id)
        .bind(progress.next_step.as_str())
        .bind(progress.started_at)
        .bind(progress.updated_at)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn clear_deletion(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM account_deletions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
