//! Decision policy output models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recommended action for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TslAction {
    /// Keep the position unchanged.
    #[default]
    #[serde(rename = "hold")]
    Hold,
    /// Sell half of the position.
    #[serde(rename = "trim_50")]
    Trim50,
    /// Close the position entirely.
    #[serde(rename = "exit_all")]
    ExitAll,
}

impl TslAction {
    /// Returns the string representation of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            TslAction::Hold => "hold",
            TslAction::Trim50 => "trim_50",
            TslAction::ExitAll => "exit_all",
        }
    }

    /// Returns true for any action other than a plain hold.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, TslAction::Hold)
    }
}

impl std::fmt::Display for TslAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of evaluating one position against the decision ladder.
///
/// Percentage fields are unset when the inputs required to compute them were
/// missing; absence of data is a valid "no signal" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TslDecision {
    pub action: TslAction,
    /// Fraction of the position to exit: 0, 0.5, or 1.
    pub exit_fraction: Decimal,
    /// Units to exit, floor of quantity times fraction with a minimum of
    /// one unit for any nonzero recommendation.
    pub exit_qty: i64,
    pub pnl_pct: Option<Decimal>,
    pub loss_pct: Option<Decimal>,
    pub drawdown_pct: Option<Decimal>,
}

impl TslDecision {
    /// The degraded outcome for positions with missing cost, price, or
    /// quantity: hold, with every metric unset.
    pub fn hold_without_data() -> Self {
        TslDecision {
            action: TslAction::Hold,
            exit_fraction: Decimal::ZERO,
            exit_qty: 0,
            pnl_pct: None,
            loss_pct: None,
            drawdown_pct: None,
        }
    }
}
