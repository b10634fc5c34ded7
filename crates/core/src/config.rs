//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::{DEFAULT_CASH_SWEEP_SYMBOL, DEFAULT_SUMMARY_MAX_ROWS};

/// Configuration for snapshot analytics and signal generation.
///
/// `excluded_symbols` lists cash/money-market sweep instruments that are
/// exempt from aggregation and decisioning. They are not tradable
/// equity/derivative positions and would distort cost-basis and peak
/// calculations. The set is caller-supplied configuration, not a business
/// rule baked into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TslConfig {
    /// Symbols excluded from all aggregation and decisioning.
    pub excluded_symbols: HashSet<String>,
    /// Row cap per section when rendering the text summary.
    pub summary_max_rows: usize,
}

impl Default for TslConfig {
    fn default() -> Self {
        TslConfig {
            excluded_symbols: HashSet::from([DEFAULT_CASH_SWEEP_SYMBOL.to_string()]),
            summary_max_rows: DEFAULT_SUMMARY_MAX_ROWS,
        }
    }
}

impl TslConfig {
    /// Returns true if the symbol is exempt from analytics.
    pub fn is_excluded(&self, symbol: &str) -> bool {
        self.excluded_symbols.contains(symbol)
    }
}
