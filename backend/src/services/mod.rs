//! Business logic services for the Travel Budget & Weather planner

pub mod account_deletion;
pub mod auth;
pub mod dashboard;
pub mod expense;
pub mod profile;
pub mod trip;
pub mod weather;

pub use account_deletion::AccountDeletionService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use expense::ExpenseService;
pub use profile::ProfileService;
pub use trip::TripService;
pub use weather::WeatherService;
