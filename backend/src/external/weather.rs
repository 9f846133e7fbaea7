//! Weather API client for fetching forecast data
//!
//! Integrates with the OpenWeatherMap 5 day / 3 hour forecast API

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{parse_feed, FeedRecord, ForecastEntry};

use super::ForecastSource;
use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    lang: String,
    units: String,
}

/// OpenWeatherMap API response for forecast.
///
/// Every field is optional so one broken item does not fail the whole feed.
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    #[serde(default)]
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt_txt: Option<String>,
    main: Option<OWMMain>,
    #[serde(default)]
    weather: Vec<OWMWeather>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: Option<String>,
    icon: Option<String>,
}

/// Error body returned by OpenWeatherMap on failure
#[derive(Debug, Deserialize)]
struct OWMError {
    message: Option<String>,
}

impl From<OWMForecastItem> for FeedRecord {
    fn from(item: OWMForecastItem) -> Self {
        let weather = item.weather.into_iter().next();
        FeedRecord {
            timestamp: item.dt_txt,
            temperature: item.main.and_then(|m| m.temp),
            condition: weather.as_ref().and_then(|w| w.description.clone()),
            icon: weather.and_then(|w| w.icon),
        }
    }
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            lang: config.lang.clone(),
            units: config.units.clone(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self::new(&WeatherConfig {
            api_endpoint: base_url,
            api_key,
            ..WeatherConfig::default()
        })
    }

    /// Fetch the raw forecast feed for a city
    pub async fn get_forecast_feed(&self, city: &str) -> AppResult<Vec<FeedRecord>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Weather API key is not set".to_string()))?;

        let url = format!("{}/forecast", self.base_url);

        tracing::debug!(city, "Requesting forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
                ("appid", api_key),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream {
                status: None,
                message: format!("Weather API request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OWMError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            return Err(AppError::Upstream {
                status: Some(status.as_u16()),
                message,
            });
        }

        let data: OWMForecastResponse = response.json().await.map_err(|e| AppError::Upstream {
            status: None,
            message: format!("Failed to parse forecast response: {}", e),
        })?;

        Ok(data.list.into_iter().map(FeedRecord::from).collect())
    }
}

#[async_trait]
impl ForecastSource for WeatherClient {
    async fn forecast(&self, city: &str) -> AppResult<Vec<ForecastEntry>> {
        let records = self.get_forecast_feed(city).await?;
        Ok(parse_feed(records))
    }
}
