//! Derived position models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CONSOLIDATED_SCOPE_LABEL;

/// The owning scope of a derived position: a single brokerage account, or
/// the consolidated roll-up across all accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionScope {
    Account(String),
    Consolidated,
}

impl PositionScope {
    /// The account id for account-scoped positions, `None` for consolidated.
    pub fn account_id(&self) -> Option<&str> {
        match self {
            PositionScope::Account(id) => Some(id),
            PositionScope::Consolidated => None,
        }
    }

    /// Display label: the account id, or the consolidated sentinel.
    pub fn label(&self) -> &str {
        match self {
            PositionScope::Account(id) => id,
            PositionScope::Consolidated => CONSOLIDATED_SCOPE_LABEL,
        }
    }
}

impl std::fmt::Display for PositionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One aggregated position for a scope/symbol on a target date.
///
/// Positions are transient computation artifacts rebuilt on every
/// invocation; they are never persisted or mutated after construction.
///
/// `peak_price >= last_price` is NOT an invariant: the peak is a historical
/// maximum over a caller-chosen window, and a window that excludes the
/// current date can trail a fresh price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub scope: PositionScope,
    pub symbol: String,
    /// Net quantity across same-day rows. Negative for net-short positions.
    pub quantity: i64,
    /// Quantity-weighted average cost. Zero when the cost basis is unknown
    /// (all contributing rows unset, or net quantity of zero).
    pub average_cost: Decimal,
    /// Maximum last price observed across same-day rows, when any carried one.
    pub last_price: Option<Decimal>,
    /// Highest observed price on or before the target date, when any prior
    /// row carried one.
    pub peak_price: Option<Decimal>,
}
