//! Route definitions for the Travel Budget & Weather planner

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Location catalog (public)
        .nest("/locations", location_routes())
        // City forecast (public)
        .route("/weather", get(handlers::get_city_forecast))
        // Protected routes - profile and account
        .merge(account_routes(state))
        // Protected routes - trips, expenses, summaries
        .nest("/trips", trip_routes(state))
        // Protected routes - dashboard
        .merge(dashboard_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
}

/// Location catalog routes (public)
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_regions))
        .route("/:region", get(handlers::get_region))
        .route("/:region/:city_en", get(handlers::get_city))
}

/// Profile and account routes (protected)
fn account_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route("/account", delete(handlers::delete_account))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

/// Trip management routes (protected)
fn trip_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_trips).post(handlers::create_trip))
        .route(
            "/:trip_id",
            get(handlers::get_trip)
                .put(handlers::update_trip)
                .delete(handlers::delete_trip),
        )
        .route("/:trip_id/summary", get(handlers::get_trip_summary))
        .route("/:trip_id/weather", get(handlers::get_trip_weather))
        .route(
            "/:trip_id/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/:trip_id/expenses/:expense_id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
