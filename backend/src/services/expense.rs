//! Expense management service

use std::sync::Arc;

use shared::{Expense, ExpenseInput};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Expense service; every operation first checks that the trip belongs to
/// the caller
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn Store>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    async fn ensure_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<()> {
        self.store
            .get_trip(user_id, trip_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Trip".to_string()))
    }

    pub async fn list_expenses(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<Vec<Expense>> {
        self.ensure_trip(user_id, trip_id).await?;
        self.store.list_expenses(trip_id).await
    }

    pub async fn get_expense(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        expense_id: Uuid,
    ) -> AppResult<Expense> {
        self.ensure_trip(user_id, trip_id).await?;
        self.store
            .get_expense(trip_id, expense_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense".to_string()))
    }

    pub async fn create_expense(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        input: ExpenseInput,
    ) -> AppResult<Expense> {
        shared::validate_expense_input(&input)?;
        self.ensure_trip(user_id, trip_id).await?;
        let expense = self.store.insert_expense(trip_id, &input).await?;
        tracing::debug!(expense_id = %expense.id, %trip_id, category = %expense.category, "Expense recorded");
        Ok(expense)
    }

    pub async fn update_expense(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        expense_id: Uuid,
        input: ExpenseInput,
    ) -> AppResult<Expense> {
        shared::validate_expense_input(&input)?;
        self.ensure_trip(user_id, trip_id).await?;
        self.store
            .update_expense(trip_id, expense_id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense".to_string()))
    }

    pub async fn delete_expense(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        expense_id: Uuid,
    ) -> AppResult<()> {
        self.ensure_trip(user_id, trip_id).await?;
        if !self.store.delete_expense(trip_id, expense_id).await? {
            return Err(AppError::NotFound("Expense".to_string()));
        }
        Ok(())
    }
}
