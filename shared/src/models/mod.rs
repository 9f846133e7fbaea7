//! Domain models for the Travel Budget & Weather planner

mod expense;
mod trip;
mod user;
mod weather;

pub use expense::*;
pub use trip::*;
pub use user::*;
pub use weather::*;
