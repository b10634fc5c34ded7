//! Proportional distribution of a consolidated exit quantity.
//!
//! Each account receives a share proportional to its contribution to the
//! consolidated quantity, capped at its own holding, and the shares sum
//! exactly to the requested exit quantity. Independent rounding of the
//! initial shares rarely lands on the exact total, so a deterministic
//! correction walk cycles the account list in order, moving one unit at a
//! time until the remainder is absorbed.

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::{AccountHolding, ExitAllocation};

/// Splits `exit_qty` across `holdings` proportionally to each account's
/// share of the total quantity.
///
/// Postconditions: the allocations sum exactly to `exit_qty`, and each
/// account's allocation stays within `[0, |quantity|]`. A zero exit
/// quantity (or no holdings) yields an empty list, not a list of zeros.
///
/// # Panics
///
/// Panics if the remainder cannot be absorbed, which requires
/// `exit_qty > Σ|quantity|`. The exit quantity is derived from the same
/// total, so reaching this is a broken caller invariant, not a runtime
/// condition.
pub fn distribute_exit_quantity(
    exit_qty: i64,
    holdings: &[AccountHolding],
) -> Vec<ExitAllocation> {
    if exit_qty <= 0 || holdings.is_empty() {
        return Vec::new();
    }

    let caps: Vec<i64> = holdings
        .iter()
        .map(|h| h.quantity.unsigned_abs() as i64)
        .collect();
    let total_qty: i64 = caps.iter().sum();
    if total_qty == 0 {
        return Vec::new();
    }

    // Initial pass: banker's-rounded proportional share, capped at the
    // account's own quantity.
    let mut quantities: Vec<i64> = caps
        .iter()
        .map(|&cap| {
            let share = Decimal::from(exit_qty) * Decimal::from(cap) / Decimal::from(total_qty);
            share.round().to_i64().unwrap_or(0).min(cap)
        })
        .collect();

    let mut diff = exit_qty - quantities.iter().sum::<i64>();
    if diff != 0 {
        debug!(
            "Correcting allocation remainder of {} across {} accounts",
            diff,
            quantities.len()
        );
    }

    // Cyclic correction in account list order, one unit per visit. A full
    // cycle without progress means the remainder exceeds the available
    // slack, which the caller-supplied invariant rules out.
    let mut idx = 0;
    let mut visits_without_progress = 0;
    while diff != 0 {
        assert!(
            visits_without_progress < quantities.len(),
            "allocation remainder {} cannot be absorbed: exit_qty {} exceeds total capacity {}",
            diff,
            exit_qty,
            total_qty,
        );

        if diff > 0 && quantities[idx] < caps[idx] {
            quantities[idx] += 1;
            diff -= 1;
            visits_without_progress = 0;
        } else if diff < 0 && quantities[idx] > 0 {
            quantities[idx] -= 1;
            diff += 1;
            visits_without_progress = 0;
        } else {
            visits_without_progress += 1;
        }
        idx = (idx + 1) % quantities.len();
    }

    holdings
        .iter()
        .zip(quantities)
        .map(|(holding, qty)| ExitAllocation {
            account_id: holding.account_id.clone(),
            qty,
        })
        .collect()
}
