//! Holdings snapshot domain model.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observed holding row as captured from a brokerage account.
///
/// Snapshots are immutable and identified by `(account_id, symbol,
/// as_of_date)` plus the capture instant. Multiple rows may exist for the
/// same key on the same day (separate lots); the aggregator sums their
/// quantities and combines cost via quantity-weighted average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSnapshot {
    pub account_id: String,
    pub symbol: String,
    /// Held quantity. Negative for short positions; sizing logic uses the
    /// absolute magnitude.
    pub quantity: i64,
    /// Average cost per unit. Zero means the cost basis is unknown.
    pub average_cost: Decimal,
    /// Last traded price as observed at capture time, when available.
    pub last_price: Option<Decimal>,
    /// Calendar date the holdings were observed for.
    pub as_of_date: NaiveDate,
    /// Instant the snapshot row was captured.
    pub captured_at: NaiveDateTime,
}

impl HoldingSnapshot {
    pub fn new(
        account_id: impl Into<String>,
        symbol: impl Into<String>,
        quantity: i64,
        average_cost: Decimal,
        last_price: Option<Decimal>,
        as_of_date: NaiveDate,
        captured_at: NaiveDateTime,
    ) -> Self {
        HoldingSnapshot {
            account_id: account_id.into(),
            symbol: symbol.into(),
            quantity,
            average_cost,
            last_price,
            as_of_date,
            captured_at,
        }
    }
}
