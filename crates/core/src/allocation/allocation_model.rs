//! Allocation models.

use serde::{Deserialize, Serialize};

/// One account's contribution to a consolidated position, in per-account
/// aggregation order. The order is part of the distribution contract: the
/// rounding-correction walk visits accounts in list order, so reordering
/// the input reorders the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolding {
    pub account_id: String,
    /// Quantity the account holds; sizing uses the absolute magnitude.
    pub quantity: i64,
}

impl AccountHolding {
    pub fn new(account_id: impl Into<String>, quantity: i64) -> Self {
        AccountHolding {
            account_id: account_id.into(),
            quantity,
        }
    }
}

/// The slice of a consolidated exit quantity assigned to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitAllocation {
    pub account_id: String,
    pub qty: i64,
}
