//! Shared types and domain logic for the Travel Budget & Weather planner
//!
//! This crate contains the models and pure computations shared between the
//! backend, the browser (via WASM), and other components of the system.

pub mod aggregation;
pub mod error;
pub mod forecast;
pub mod locations;
pub mod models;
pub mod types;
pub mod upcoming;
pub mod validation;

pub use aggregation::*;
pub use error::*;
pub use forecast::*;
pub use models::*;
pub use types::*;
pub use upcoming::*;
pub use validation::*;
