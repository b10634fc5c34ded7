//! Trailing-stop-loss decision policy.

mod tsl_model;
mod tsl_policy;

pub use tsl_model::*;
pub use tsl_policy::*;
