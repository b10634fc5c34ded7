//! Holdings snapshot domain - models and the repository read boundary.

mod snapshot_model;
mod snapshot_traits;

pub use snapshot_model::*;
pub use snapshot_traits::*;
