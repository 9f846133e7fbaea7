//! HTTP handlers

pub mod account;
pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod health;
pub mod locations;
pub mod profile;
pub mod trips;
pub mod weather;

pub use account::delete_account;
pub use auth::{login, signup};
pub use dashboard::get_dashboard;
pub use expenses::{create_expense, delete_expense, get_expense, list_expenses, update_expense};
pub use health::health_check;
pub use locations::{get_city, get_region, list_regions};
pub use profile::{get_profile, update_profile};
pub use trips::{create_trip, delete_trip, get_trip, get_trip_summary, list_trips, update_trip};
pub use weather::{get_city_forecast, get_trip_weather};
