//! Helpers shared by the HTTP tests: an in-memory app, a canned forecast
//! source, and request plumbing.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use shared::ForecastEntry;
use tower::ServiceExt;

use tbw_backend::config::{
    AppConfig, Config, DatabaseConfig, JwtConfig, LogFormat, LoggingConfig, ServerConfig,
    StorageBackend, StorageConfig, WeatherConfig,
};
use tbw_backend::error::{AppError, AppResult};
use tbw_backend::external::ForecastSource;
use tbw_backend::store::{MemoryStore, Store};
use tbw_backend::{create_app, AppState};

pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://localhost/unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        storage: StorageConfig {
            backend: StorageBackend::Memory,
        },
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
            bcrypt_cost: 4,
        },
        weather: WeatherConfig::default(),
        app: AppConfig {
            utc_offset_seconds: 9 * 3600,
        },
        logging: LoggingConfig {
            format: LogFormat::Pretty,
        },
    }
}

/// Forecast source returning a fixed feed, or failing every call
pub enum StubForecast {
    Feed(Vec<ForecastEntry>),
    Failing,
}

#[async_trait]
impl ForecastSource for StubForecast {
    async fn forecast(&self, _city: &str) -> AppResult<Vec<ForecastEntry>> {
        match self {
            StubForecast::Feed(entries) => Ok(entries.clone()),
            StubForecast::Failing => Err(AppError::Upstream {
                status: Some(503),
                message: "service unavailable".to_string(),
            }),
        }
    }
}

/// Three-hourly entries covering `first..=last`
pub fn feed_between(first: &str, last: &str) -> Vec<ForecastEntry> {
    let mut day: NaiveDate = first.parse().unwrap();
    let last: NaiveDate = last.parse().unwrap();
    let mut entries = Vec::new();
    while day <= last {
        for hour in (0..24).step_by(3) {
            entries.push(ForecastEntry {
                timestamp: day.and_hms_opt(hour, 0, 0).unwrap(),
                temperature: 18,
                condition: "晴れ".to_string(),
                icon: "01d".to_string(),
            });
        }
        day = day.succ_opt().unwrap();
    }
    entries
}

pub fn app_with(store: Arc<dyn Store>, forecasts: StubForecast) -> Router {
    create_app(AppState {
        store,
        forecasts: Arc::new(forecasts),
        config: Arc::new(test_config()),
    })
}

pub fn memory_app(forecasts: StubForecast) -> Router {
    app_with(Arc::new(MemoryStore::new()), forecasts)
}

/// Send a request and decode the JSON body (`Value::Null` when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Sign up a fresh user and return the access token
pub async fn signup(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({ "email": email, "password": "secret123", "username": "tabibito" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
    body["access_token"].as_str().unwrap().to_string()
}

pub fn kyoto_trip(start: &str, end: &str, budget: i64) -> Value {
    json!({
        "title": "Kyoto autumn",
        "start_date": start,
        "end_date": end,
        "budget": budget,
        "destination": { "region": "京都府", "city_name": "京都市", "city_en": "Kyoto" },
        "memo": "temples"
    })
}

/// Create a trip and return its id
pub async fn create_trip(app: &Router, token: &str, trip: Value) -> String {
    let (status, body) = send(app, Method::POST, "/api/v1/trips", Some(token), Some(trip)).await;
    assert_eq!(status, StatusCode::CREATED, "trip creation failed: {}", body);
    body["id"].as_str().unwrap().to_string()
}

pub async fn add_expense(app: &Router, token: &str, trip_id: &str, category: &str, amount: i64) {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/v1/trips/{}/expenses", trip_id),
        Some(token),
        Some(json!({
            "title": "item",
            "amount": amount,
            "category": category,
            "date": "2099-04-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "expense creation failed: {}", body);
}
