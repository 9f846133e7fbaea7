//! Trip management service

use std::sync::Arc;

use shared::{summarize, ExpenseSummary, Trip, TripInput};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Trip service for managing a user's travel plans
#[derive(Clone)]
pub struct TripService {
    store: Arc<dyn Store>,
}

impl TripService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Get all trips for a user, earliest first
    pub async fn list_trips(&self, user_id: Uuid) -> AppResult<Vec<Trip>> {
        self.store.list_trips(user_id).await
    }

    /// Get a trip owned by the user
    pub async fn get_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<Trip> {
        self.store
            .get_trip(user_id, trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip".to_string()))
    }

    /// Create a trip after validating dates, budget, and destination
    pub async fn create_trip(&self, user_id: Uuid, input: TripInput) -> AppResult<Trip> {
        shared::validate_trip_input(&input)?;
        let trip = self.store.insert_trip(user_id, &input).await?;
        tracing::info!(trip_id = %trip.id, %user_id, "Trip created");
        Ok(trip)
    }

    /// Replace a trip's fields
    pub async fn update_trip(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        input: TripInput,
    ) -> AppResult<Trip> {
        shared::validate_trip_input(&input)?;
        self.store
            .update_trip(user_id, trip_id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip".to_string()))
    }

    /// Delete a trip together with its expenses
    pub async fn delete_trip(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<()> {
        if !self.store.delete_trip(user_id, trip_id).await? {
            return Err(AppError::NotFound("Trip".to_string()));
        }
        tracing::info!(%trip_id, %user_id, "Trip deleted");
        Ok(())
    }

    /// Category totals and budget utilization for a trip
    pub async fn get_summary(&self, user_id: Uuid, trip_id: Uuid) -> AppResult<ExpenseSummary> {
        let trip = self.get_trip(user_id, trip_id).await?;
        let expenses = self.store.list_expenses(trip.id).await?;
        Ok(summarize(&expenses, trip.budget))
    }
}
