//! HTTP API tests against the in-memory store
//!
//! - Authentication and signup validation
//! - Trip and expense CRUD with budget summaries
//! - Trip weather windows and the dashboard

mod common;

use std::str::FromStr;

use axum::http::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;

use common::*;

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_trips_require_token() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let (status, body) = send(&app, Method::GET, "/api/v1/trips", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = send(&app, Method::GET, "/api/v1/trips", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_validation() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({ "email": "a@example.com", "password": "123", "username": "ab" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "password");
    assert!(body["error"]["message_ja"].as_str().unwrap().contains("6文字"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({ "email": "a@example.com", "password": "123456", "username": "a" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "username");
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = memory_app(StubForecast::Feed(vec![]));
    signup(&app, "dup@example.com").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({ "email": "DUP@example.com", "password": "secret123", "username": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_ENTRY");
}

#[tokio::test]
async fn test_login() {
    let app = memory_app(StubForecast::Feed(vec![]));
    signup(&app, "login@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "login@example.com", "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "login@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_profile_get_and_update() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "profile@example.com").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["username"], "tabibito");
    assert_eq!(body["profile"]["email"], "profile@example.com");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/profile",
        Some(&token),
        Some(json!({ "username": "旅好き", "email": "profile@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["username"], "旅好き");
}

// ============================================================================
// Trip & Expense Tests
// ============================================================================

#[tokio::test]
async fn test_trip_with_end_before_start_rejected() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "dates@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/trips",
        Some(&token),
        Some(kyoto_trip("2099-04-03", "2099-04-01", 10_000)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "end_date");
}

#[tokio::test]
async fn test_trip_with_unknown_destination_rejected() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "dest@example.com").await;

    let mut trip = kyoto_trip("2099-04-01", "2099-04-03", 0);
    trip["destination"]["city_en"] = json!("Osaka");
    let (status, body) = send(&app, Method::POST, "/api/v1/trips", Some(&token), Some(trip)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "destination");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "json@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/trips",
        Some(&token),
        Some(json!({ "title": "no dates" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_ids_are_validation_errors() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "ids@example.com").await;
    let trip_id = create_trip(&app, &token, kyoto_trip("2099-04-01", "2099-04-03", 0)).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/trips/not-a-uuid", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/trips/{}/expenses/42", trip_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_trips_are_private() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let alice = signup(&app, "alice@example.com").await;
    let bob = signup(&app, "bob@example.com").await;
    let trip_id = create_trip(&app, &alice, kyoto_trip("2099-04-01", "2099-04-03", 0)).await;

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/trips/{}", trip_id),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/v1/trips", Some(&bob), None).await;
    assert_eq!(body["trips"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_summary_end_to_end() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "summary@example.com").await;
    let trip_id = create_trip(&app, &token, kyoto_trip("2099-04-01", "2099-04-03", 10_000)).await;

    add_expense(&app, &token, &trip_id, "food", 3000).await;
    add_expense(&app, &token, &trip_id, "weird", 1000).await;

    let (status, summary) = send(
        &app,
        Method::GET,
        &format!("/api/v1/trips/{}/summary", trip_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let categories = summary["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 5);
    let amount = |key: &str| {
        categories
            .iter()
            .find(|c| c["category"] == key)
            .map(|c| c["amount"].as_i64().unwrap())
            .unwrap()
    };
    assert_eq!(amount("food"), 3000);
    assert_eq!(amount("other"), 1000);
    assert_eq!(amount("transportation"), 0);
    assert_eq!(amount("lodging"), 0);
    assert_eq!(amount("sightseeing"), 0);

    assert_eq!(summary["total"], 4000);
    let raw = Decimal::from_str(summary["utilization"]["raw_percent"].as_str().unwrap()).unwrap();
    assert_eq!(raw, Decimal::from(40));
    assert_eq!(summary["utilization"]["status"], "ok");
}

#[tokio::test]
async fn test_expense_crud_and_trip_delete() {
    let app = memory_app(StubForecast::Feed(vec![]));
    let token = signup(&app, "crud@example.com").await;
    let trip_id = create_trip(&app, &token, kyoto_trip("2099-04-01", "2099-04-03", 50_000)).await;
    let expenses_uri = format!("/api/v1/trips/{}/expenses", trip_id);

    let (status, created) = send(
        &app,
        Method::POST,
        &expenses_uri,
        Some(&token),
        Some(json!({ "title": "Shinkansen", "amount": 14_000, "category": "交通費", "date": "2099-04-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["category"], "transportation");
    let expense_uri = format!("{}/{}", expenses_uri, created["id"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &expense_uri,
        Some(&token),
        Some(json!({ "title": "Shinkansen", "amount": 13_500, "category": "transportation", "date": "2099-04-01", "memo": "discount" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["amount"], 13_500);

    let (status, body) = send(
        &app,
        Method::POST,
        &expenses_uri,
        Some(&token),
        Some(json!({ "title": "refund", "amount": -100, "category": "other", "date": "2099-04-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "amount");

    let (status, _) = send(&app, Method::DELETE, &expense_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &expense_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let trip_uri = format!("/api/v1/trips/{}", trip_id);
    let (status, _) = send(&app, Method::DELETE, &trip_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &expenses_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Location Tests
// ============================================================================

#[tokio::test]
async fn test_locations() {
    let app = memory_app(StubForecast::Feed(vec![]));

    let (status, body) = send(&app, Method::GET, "/api/v1/locations", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regions"].as_array().unwrap().len(), 47);

    // 京都府
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/locations/%E4%BA%AC%E9%83%BD%E5%BA%9C/Kyoto",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "京都市");

    let (status, _) = send(&app, Method::GET, "/api/v1/locations/Atlantis", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Weather & Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_city_forecast_requires_city() {
    let app = memory_app(StubForecast::Feed(feed_between("2099-04-01", "2099-04-02")));

    let (status, body) = send(&app, Method::GET, "/api/v1/weather", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "city");

    let (status, body) = send(&app, Method::GET, "/api/v1/weather?city=Kyoto", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn test_city_forecast_upstream_failure() {
    let app = memory_app(StubForecast::Failing);
    let (status, body) = send(&app, Method::GET, "/api/v1/weather?city=Kyoto", None, None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["upstream_status"], 503);
}

#[tokio::test]
async fn test_trip_weather_window() {
    let app = memory_app(StubForecast::Feed(feed_between("2099-03-30", "2099-04-05")));
    let token = signup(&app, "weather@example.com").await;
    let trip_id = create_trip(&app, &token, kyoto_trip("2099-04-02", "2099-04-03", 0)).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/trips/{}/weather", trip_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Kyoto");
    assert_eq!(body["coverage"], "available");

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2099-04-02");
    assert_eq!(days[1]["date"], "2099-04-03");
    assert_eq!(days[0]["entries"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_trip_weather_beyond_horizon() {
    let app = memory_app(StubForecast::Feed(feed_between("2099-03-30", "2099-04-05")));
    let token = signup(&app, "horizon@example.com").await;
    let trip_id = create_trip(&app, &token, kyoto_trip("2099-05-01", "2099-05-03", 0)).await;

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/trips/{}/weather", trip_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["coverage"], "beyond_horizon");
    assert!(body["days"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_picks_nearest_trip() {
    let app = memory_app(StubForecast::Feed(feed_between("2099-04-01", "2099-04-05")));
    let token = signup(&app, "dash@example.com").await;
    create_trip(&app, &token, kyoto_trip("2000-01-10", "2000-01-12", 0)).await;
    let near = create_trip(&app, &token, kyoto_trip("2099-04-01", "2099-04-02", 0)).await;
    create_trip(&app, &token, kyoto_trip("2099-08-01", "2099-08-02", 0)).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trips"].as_array().unwrap().len(), 3);
    assert_eq!(body["upcoming_trip"]["id"], near.as_str());
    assert_eq!(body["weather"]["days"].as_array().unwrap().len(), 2);
    assert!(body["weather_error"].is_null());
}

#[tokio::test]
async fn test_dashboard_survives_forecast_failure() {
    let app = memory_app(StubForecast::Failing);
    let token = signup(&app, "partial@example.com").await;
    let trip_id = create_trip(&app, &token, kyoto_trip("2099-04-01", "2099-04-02", 0)).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upcoming_trip"]["id"], trip_id.as_str());
    assert!(body["weather"].is_null());
    assert!(body["weather_error"].is_string());
}

#[tokio::test]
async fn test_dashboard_without_upcoming_trip() {
    let app = memory_app(StubForecast::Failing);
    let token = signup(&app, "past@example.com").await;
    create_trip(&app, &token, kyoto_trip("2000-01-10", "2000-01-12", 0)).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["upcoming_trip"].is_null());
    assert!(body["weather_error"].is_null());
}
