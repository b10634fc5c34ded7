//! Distribution of consolidated exit quantities across accounts.

mod allocation_calculator;
mod allocation_model;

pub use allocation_calculator::*;
pub use allocation_model::*;
