//! Signal models consumed read-only by presentation collaborators.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::ExitAllocation;
use crate::positions::{Position, PositionScope};
use crate::tsl::TslAction;

/// One decisioned position: the aggregated state, the policy outcome, and
/// the monetary context for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TslSignal {
    pub scope: PositionScope,
    pub symbol: String,
    pub quantity: i64,
    pub average_cost: Decimal,
    pub last_price: Option<Decimal>,
    pub peak_price: Option<Decimal>,
    /// Current market value, `quantity * last_price`; unset prices count
    /// as zero.
    pub value: Decimal,
    /// Unrealized P&L, `quantity * (last_price - average_cost)`; unset
    /// prices and unknown cost count as zero.
    pub pnl_amount: Decimal,
    pub action: TslAction,
    pub exit_fraction: Decimal,
    pub exit_qty: i64,
    pub pnl_pct: Option<Decimal>,
    pub loss_pct: Option<Decimal>,
    pub drawdown_pct: Option<Decimal>,
    /// Per-account breakdown of the exit quantity. Populated only on
    /// consolidated signals with a nonzero exit recommendation.
    #[serde(default)]
    pub allocations: Vec<ExitAllocation>,
}

/// The complete recommendation set for one target date.
///
/// An empty set with an unset date is the valid "nothing to report" state
/// for an empty snapshot store, distinguished from a computation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignalSet {
    pub as_of_date: Option<NaiveDate>,
    pub per_account: Vec<TslSignal>,
    pub consolidated: Vec<TslSignal>,
}

impl SignalSet {
    /// The "nothing to report" set.
    pub fn empty() -> Self {
        SignalSet::default()
    }

    pub fn is_empty(&self) -> bool {
        self.per_account.is_empty() && self.consolidated.is_empty()
    }
}

/// Decision-free position overview for one target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PositionSet {
    pub as_of_date: Option<NaiveDate>,
    pub per_account: Vec<Position>,
    pub consolidated: Vec<Position>,
}

impl PositionSet {
    pub fn empty() -> Self {
        PositionSet::default()
    }
}
