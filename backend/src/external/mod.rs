//! External API integrations

pub mod weather;

pub use weather::WeatherClient;

use async_trait::async_trait;
use shared::ForecastEntry;

use crate::error::AppResult;

/// Anything that can produce a 3-hourly forecast for a city
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Forecast entries for `city`, malformed records already dropped
    async fn forecast(&self, city: &str) -> AppResult<Vec<ForecastEntry>>;
}
