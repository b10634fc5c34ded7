//! Trailguard Core - snapshot aggregation and trailing-stop-loss
//! decisioning.
//!
//! This crate contains the decision engine: it rolls daily holdings
//! snapshots up into per-account and consolidated positions, tracks
//! historical peak prices, applies the layered trailing-stop-loss policy,
//! and distributes consolidated exit quantities back across accounts.
//! It is storage-agnostic: snapshot persistence implements the
//! [`snapshots::SnapshotRepositoryTrait`] boundary outside this crate.

pub mod allocation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod positions;
pub mod reporting;
pub mod signals;
pub mod snapshots;
pub mod tsl;

// Re-export common types from the snapshot and signal modules
pub use signals::*;
pub use snapshots::*;

pub use config::TslConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
