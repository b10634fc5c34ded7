//! The layered trailing-stop-loss decision ladder.
//!
//! A pure, stateless classification: identical inputs always produce the
//! identical decision. The ladder is evaluated top to bottom and the first
//! match wins; hard loss stops take precedence over profit-taking and
//! drawdown rules, in exactly this order:
//!
//! 1. loss >= 20%            -> exit_all
//! 2. loss >= 15%            -> trim_50
//! 3. pnl < 5%: pnl < 1.5%   -> exit_all, else hold
//! 4. pnl >= 5% with a known peak: drawdown >= 25% -> exit_all,
//!    drawdown >= 15% -> trim_50, else hold
//! 5. otherwise              -> hold

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{TslAction, TslDecision};

/// Loss from cost at or beyond which the whole position is exited.
pub const LOSS_EXIT_THRESHOLD_PCT: Decimal = dec!(20);
/// Loss from cost at or beyond which half the position is trimmed.
pub const LOSS_TRIM_THRESHOLD_PCT: Decimal = dec!(15);
/// Below this profit the position is considered weak.
pub const WEAK_PNL_THRESHOLD_PCT: Decimal = dec!(5);
/// Weak positions below this profit are closed as stagnant.
pub const STAGNANT_EXIT_THRESHOLD_PCT: Decimal = dec!(1.5);
/// Drawdown from peak at or beyond which a profitable position is exited.
pub const DRAWDOWN_EXIT_THRESHOLD_PCT: Decimal = dec!(25);
/// Drawdown from peak at or beyond which a profitable position is trimmed.
pub const DRAWDOWN_TRIM_THRESHOLD_PCT: Decimal = dec!(15);

const HALF: Decimal = dec!(0.5);
const HUNDRED: Decimal = dec!(100);

/// Evaluates one position against the decision ladder.
///
/// An unknown cost basis (zero), an unset or zero last price, or a zero
/// quantity short-circuits to a hold with unset metrics. Sizing uses the
/// absolute quantity so short positions are recommended in magnitude terms.
pub fn evaluate(
    average_cost: Decimal,
    last_price: Option<Decimal>,
    peak_price: Option<Decimal>,
    quantity: i64,
) -> TslDecision {
    let Some(last_price) = last_price.filter(|price| *price > Decimal::ZERO) else {
        return TslDecision::hold_without_data();
    };
    if average_cost <= Decimal::ZERO || quantity == 0 {
        return TslDecision::hold_without_data();
    }

    let pnl_pct = (last_price - average_cost) / average_cost * HUNDRED;
    let loss_pct = ((average_cost - last_price) / average_cost * HUNDRED).max(Decimal::ZERO);
    let drawdown_pct = peak_price
        .filter(|peak| *peak > Decimal::ZERO)
        .map(|peak| ((peak - last_price) / peak * HUNDRED).max(Decimal::ZERO));

    let (action, exit_fraction) = if loss_pct >= LOSS_EXIT_THRESHOLD_PCT {
        (TslAction::ExitAll, Decimal::ONE)
    } else if loss_pct >= LOSS_TRIM_THRESHOLD_PCT {
        (TslAction::Trim50, HALF)
    } else if pnl_pct < WEAK_PNL_THRESHOLD_PCT {
        if pnl_pct < STAGNANT_EXIT_THRESHOLD_PCT {
            (TslAction::ExitAll, Decimal::ONE)
        } else {
            (TslAction::Hold, Decimal::ZERO)
        }
    } else {
        match drawdown_pct {
            Some(drawdown) if drawdown >= DRAWDOWN_EXIT_THRESHOLD_PCT => {
                (TslAction::ExitAll, Decimal::ONE)
            }
            Some(drawdown) if drawdown >= DRAWDOWN_TRIM_THRESHOLD_PCT => {
                (TslAction::Trim50, HALF)
            }
            _ => (TslAction::Hold, Decimal::ZERO),
        }
    };

    let sizing_qty = quantity.unsigned_abs();
    let mut exit_qty = (Decimal::from(sizing_qty) * exit_fraction)
        .floor()
        .to_i64()
        .unwrap_or(0);
    // A nonzero recommendation must recommend at least one unit.
    if exit_fraction > Decimal::ZERO && exit_qty == 0 {
        exit_qty = 1;
    }

    TslDecision {
        action,
        exit_fraction,
        exit_qty,
        pnl_pct: Some(pnl_pct),
        loss_pct: Some(loss_pct),
        drawdown_pct,
    }
}
