//! Weather service: city forecasts and per-trip weather windows

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    coverage, local_today, select_window, DateRange, ForecastCoverage, ForecastDay,
    ForecastEntry, Trip,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::ForecastSource;

/// Forecast for the days of one trip
#[derive(Debug, Clone, Serialize)]
pub struct TripWeather {
    pub trip_id: Uuid,
    pub city: String,
    pub range: DateRange,
    pub coverage: ForecastCoverage,
    pub days: Vec<ForecastDay>,
}

#[derive(Clone)]
pub struct WeatherService {
    forecasts: Arc<dyn ForecastSource>,
    utc_offset_seconds: i32,
}

impl WeatherService {
    pub fn new(forecasts: Arc<dyn ForecastSource>, utc_offset_seconds: i32) -> Self {
        Self {
            forecasts,
            utc_offset_seconds,
        }
    }

    /// Raw forecast entries for a city
    pub async fn city_forecast(&self, city: &str) -> AppResult<Vec<ForecastEntry>> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::invalid("city", "City is required"));
        }
        self.forecasts.forecast(city).await
    }

    /// Forecast entries that fall within the trip, grouped by day
    pub async fn trip_weather(&self, trip: &Trip, now: DateTime<Utc>) -> AppResult<TripWeather> {
        let city = &trip.destination.city_en;
        let entries = self.forecasts.forecast(city).await?;
        let range = trip.date_range();
        let today = local_today(now, self.utc_offset_seconds);

        let days = select_window(&entries, &range);
        let coverage = coverage(&entries, &range, today);

        tracing::debug!(trip_id = %trip.id, days = days.len(), ?coverage, "Trip weather window selected");

        Ok(TripWeather {
            trip_id: trip.id,
            city: city.clone(),
            range,
            coverage,
            days,
        })
    }
}
