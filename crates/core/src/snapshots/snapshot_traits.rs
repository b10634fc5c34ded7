//! Repository trait for holdings snapshots.

use chrono::NaiveDate;

use super::HoldingSnapshot;
use crate::errors::Result;

/// Read interface over the append-only, date-partitioned snapshot store.
///
/// The engine never writes through this trait. Implementations live outside
/// this crate (parquet, SQL, broker exports); they convert storage errors
/// into [`crate::errors::Error::Repository`], the one condition that
/// propagates to callers as a hard failure.
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// All snapshot rows with `as_of_date == date`.
    fn get_snapshots_on_date(&self, date: NaiveDate) -> Result<Vec<HoldingSnapshot>>;

    /// All snapshot rows with `as_of_date <= date`, the peak-scan input.
    fn get_snapshots_through_date(&self, date: NaiveDate) -> Result<Vec<HoldingSnapshot>>;

    /// The most recent `as_of_date` with any data, `None` on an empty store.
    fn get_latest_snapshot_date(&self) -> Result<Option<NaiveDate>>;
}
