//! Position derivation - same-day aggregation and historical peak tracking.

mod peak_tracker;
mod position_aggregator;
mod positions_model;

pub use peak_tracker::*;
pub use position_aggregator::*;
pub use positions_model::*;
