//! HTTP handlers for weather endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde::Deserialize;
use shared::ForecastEntry;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::weather::TripWeather;
use crate::services::{TripService, WeatherService};
use crate::AppState;

/// Query parameters for a city forecast
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub city: String,
}

/// Forecast entries for a city
pub async fn get_city_forecast(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<CityQuery>, AppError>,
) -> AppResult<Json<Vec<ForecastEntry>>> {
    let service = WeatherService::new(state.forecasts, state.config.app.utc_offset_seconds);
    let entries = service.city_forecast(&query.city).await?;
    Ok(Json(entries))
}

/// Forecast for the days of a trip
pub async fn get_trip_weather(
    State(state): State<AppState>,
    current_user: CurrentUser,
    WithRejection(Path(trip_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<TripWeather>> {
    let trip = TripService::new(state.store)
        .get_trip(current_user.0.user_id, trip_id)
        .await?;
    let service = WeatherService::new(state.forecasts, state.config.app.utc_offset_seconds);
    let weather = service.trip_weather(&trip, Utc::now()).await?;
    Ok(Json(weather))
}
