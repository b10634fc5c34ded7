//! Console digest of a signal set.
//!
//! Renders only actionable rows, largest positions first, so the reader
//! sees the exits worth the most money at the top. Presentation
//! collaborators own the actual delivery; this module only produces the
//! text.

use rust_decimal::Decimal;

use crate::signals::{SignalSet, TslSignal};

const RULE_WIDTH: usize = 60;

/// Renders the two-section text summary for a signal set.
///
/// Hold rows are omitted; each section lists at most
/// `max_rows_per_section` rows, sorted by current value then unrealized
/// P&L, descending. Consolidated rows append their non-zero per-account
/// allocation breakdown.
pub fn render_signal_summary(signals: &SignalSet, max_rows_per_section: usize) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);
    let as_of = signals
        .as_of_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "n/a".to_string());

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Trailing Stop Suggestions as of {}\n", as_of));
    out.push_str(&rule);
    out.push('\n');

    out.push_str("Per-account:\n");
    render_section(&mut out, &signals.per_account, max_rows_per_section);

    out.push_str("\nConsolidated across accounts:\n");
    render_section(&mut out, &signals.consolidated, max_rows_per_section);

    out
}

fn render_section(out: &mut String, signals: &[TslSignal], max_rows: usize) {
    let mut actionable: Vec<&TslSignal> =
        signals.iter().filter(|s| s.action.is_actionable()).collect();
    actionable.sort_by(|a, b| (b.value, b.pnl_amount).cmp(&(a.value, a.pnl_amount)));

    if actionable.is_empty() {
        out.push_str("  (no actions)\n");
        return;
    }

    for signal in actionable.iter().take(max_rows) {
        out.push_str(&format_row(signal));
        out.push('\n');
    }
}

fn format_row(signal: &TslSignal) -> String {
    let mut row = format!(
        "  [{}] {}: {} qty={} | value={} pnl_amt={} pnl={:.2}% loss={:.2}% dd={:.2}%",
        signal.scope,
        signal.symbol,
        signal.action,
        signal.exit_qty,
        rounded_amount(signal.value),
        rounded_amount(signal.pnl_amount),
        signal.pnl_pct.unwrap_or(Decimal::ZERO),
        signal.loss_pct.unwrap_or(Decimal::ZERO),
        signal.drawdown_pct.unwrap_or(Decimal::ZERO),
    );

    let alloc: Vec<String> = signal
        .allocations
        .iter()
        .filter(|a| a.qty != 0)
        .map(|a| format!("{}:{}", a.account_id, a.qty))
        .collect();
    if !alloc.is_empty() {
        row.push_str(&format!(" | alloc: {}", alloc.join(", ")));
    }

    row
}

fn rounded_amount(amount: Decimal) -> Decimal {
    amount.round()
}
