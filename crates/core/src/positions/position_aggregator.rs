//! Collapses snapshot rows into one position per scope/symbol.
//!
//! Same-day rows for one `(account, symbol)` are separate lots: quantities
//! are summed (signed), cost is combined via quantity-weighted average, and
//! the reported price is the maximum observed across the group. Multiple
//! lots on the same day should report the same market price; max is the
//! documented tie-break when they diverge.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use super::{Position, PositionScope};
use crate::snapshots::HoldingSnapshot;

#[derive(Default)]
struct PositionAccumulator {
    quantity: i64,
    weighted_cost: Decimal,
    last_price: Option<Decimal>,
}

impl PositionAccumulator {
    fn absorb(&mut self, row: &HoldingSnapshot) {
        self.quantity += row.quantity;
        self.weighted_cost += Decimal::from(row.quantity) * row.average_cost;
        // Option ordering places None below any Some, so this is
        // max-of-present-prices.
        self.last_price = self.last_price.max(row.last_price);
    }

    fn average_cost(&self) -> Decimal {
        if self.quantity == 0 {
            // Zero net quantity: the weighted average is undefined, report
            // an unknown cost rather than erroring.
            Decimal::ZERO
        } else {
            self.weighted_cost / Decimal::from(self.quantity)
        }
    }
}

/// One position per `(account, symbol)` held on `target_date`, ordered by
/// account then symbol. A date with no matching rows yields an empty vector.
pub fn aggregate_account_positions(
    snapshots: &[HoldingSnapshot],
    target_date: NaiveDate,
    excluded_symbols: &HashSet<String>,
) -> Vec<Position> {
    let mut groups: BTreeMap<(String, String), PositionAccumulator> = BTreeMap::new();

    for row in snapshots {
        if row.as_of_date != target_date || excluded_symbols.contains(&row.symbol) {
            continue;
        }
        groups
            .entry((row.account_id.clone(), row.symbol.clone()))
            .or_default()
            .absorb(row);
    }

    groups
        .into_iter()
        .map(|((account_id, symbol), acc)| Position {
            scope: PositionScope::Account(account_id),
            symbol,
            quantity: acc.quantity,
            average_cost: acc.average_cost(),
            last_price: acc.last_price,
            peak_price: None,
        })
        .collect()
}

/// One position per `symbol` across all accounts on `target_date`, ordered
/// by symbol.
pub fn aggregate_consolidated_positions(
    snapshots: &[HoldingSnapshot],
    target_date: NaiveDate,
    excluded_symbols: &HashSet<String>,
) -> Vec<Position> {
    let mut groups: BTreeMap<String, PositionAccumulator> = BTreeMap::new();

    for row in snapshots {
        if row.as_of_date != target_date || excluded_symbols.contains(&row.symbol) {
            continue;
        }
        groups.entry(row.symbol.clone()).or_default().absorb(row);
    }

    groups
        .into_iter()
        .map(|(symbol, acc)| {
            if acc.quantity == 0 && acc.weighted_cost != Decimal::ZERO {
                warn!(
                    "Consolidated position {} nets to zero quantity with nonzero cost weight. Cost reported as unknown.",
                    symbol
                );
            }
            Position {
                scope: PositionScope::Consolidated,
                symbol,
                quantity: acc.quantity,
                average_cost: acc.average_cost(),
                last_price: acc.last_price,
                peak_price: None,
            }
        })
        .collect()
}
