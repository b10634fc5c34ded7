//! Signal set construction - the engine's outward-facing surface.

mod signal_service;
mod signals_model;

pub use signal_service::*;
pub use signals_model::*;

#[cfg(test)]
pub mod signal_service_tests;
