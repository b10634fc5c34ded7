/// Display label for the consolidated (all-accounts) scope
pub const CONSOLIDATED_SCOPE_LABEL: &str = "CONSOLIDATED";

/// Cash/money-market sweep symbol excluded from analytics by default
pub const DEFAULT_CASH_SWEEP_SYMBOL: &str = "LIQUIDCASE";

/// Default row cap per section in the text summary
pub const DEFAULT_SUMMARY_MAX_ROWS: usize = 20;
