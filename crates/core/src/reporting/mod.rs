//! Plain-text rendering of signal sets.

mod summary;

pub use summary::*;
