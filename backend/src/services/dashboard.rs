//! Dashboard service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{nearest_upcoming_trip, Trip};
use uuid::Uuid;

use super::weather::{TripWeather, WeatherService};
use crate::error::AppResult;
use crate::external::ForecastSource;
use crate::store::Store;

/// Everything the dashboard renders.
///
/// A forecast failure leaves `weather` empty and fills `weather_error`
/// instead of failing the whole response.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub trips: Vec<Trip>,
    pub upcoming_trip: Option<Trip>,
    pub weather: Option<TripWeather>,
    pub weather_error: Option<String>,
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn Store>,
    weather: WeatherService,
    utc_offset_seconds: i32,
}

impl DashboardService {
    pub fn new(
        store: Arc<dyn Store>,
        forecasts: Arc<dyn ForecastSource>,
        utc_offset_seconds: i32,
    ) -> Self {
        Self {
            store,
            weather: WeatherService::new(forecasts, utc_offset_seconds),
            utc_offset_seconds,
        }
    }

    pub async fn get_dashboard(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Dashboard> {
        let trips = self.store.list_trips(user_id).await?;
        let upcoming_trip = nearest_upcoming_trip(&trips, now, self.utc_offset_seconds).cloned();

        let (weather, weather_error) = match &upcoming_trip {
            Some(trip) => match self.weather.trip_weather(trip, now).await {
                Ok(w) => (Some(w), None),
                Err(e) => {
                    tracing::warn!(trip_id = %trip.id, error = %e, "Dashboard forecast unavailable");
                    (None, Some(e.to_string()))
                }
            },
            None => (None, None),
        };

        Ok(Dashboard {
            trips,
            upcoming_trip,
            weather,
            weather_error,
        })
    }
}
