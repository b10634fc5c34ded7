//! Historical peak price tracking.
//!
//! The peak is the maximum `last_price` observed across all snapshots dated
//! on or before the target date, the drawdown reference for the decision
//! policy. This is a full historical scan over the supplied slice, not a
//! rolling window: under a fixed target date the peak never decreases as
//! history accumulates, and it is recomputed from scratch per query with no
//! state carried between calls.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::snapshots::HoldingSnapshot;

/// Highest observed price per `(account, symbol)` on or before
/// `target_date`. Symbols with no priced row in the window are absent.
pub fn account_peak_prices(
    snapshots: &[HoldingSnapshot],
    target_date: NaiveDate,
    excluded_symbols: &HashSet<String>,
) -> HashMap<(String, String), Decimal> {
    let mut peaks: HashMap<(String, String), Decimal> = HashMap::new();

    for row in snapshots {
        if row.as_of_date > target_date || excluded_symbols.contains(&row.symbol) {
            continue;
        }
        let Some(price) = row.last_price else {
            continue;
        };
        peaks
            .entry((row.account_id.clone(), row.symbol.clone()))
            .and_modify(|peak| *peak = (*peak).max(price))
            .or_insert(price);
    }

    peaks
}

/// Highest observed price per `symbol` across all accounts on or before
/// `target_date`.
pub fn consolidated_peak_prices(
    snapshots: &[HoldingSnapshot],
    target_date: NaiveDate,
    excluded_symbols: &HashSet<String>,
) -> HashMap<String, Decimal> {
    let mut peaks: HashMap<String, Decimal> = HashMap::new();

    for row in snapshots {
        if row.as_of_date > target_date || excluded_symbols.contains(&row.symbol) {
            continue;
        }
        let Some(price) = row.last_price else {
            continue;
        };
        peaks
            .entry(row.symbol.clone())
            .and_modify(|peak| *peak = (*peak).max(price))
            .or_insert(price);
    }

    peaks
}
