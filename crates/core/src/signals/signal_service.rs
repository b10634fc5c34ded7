//! Orchestration of aggregation, peak tracking, decisioning, and
//! allocation into a complete signal set.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::{PositionSet, SignalSet, TslSignal};
use crate::allocation::{distribute_exit_quantity, AccountHolding};
use crate::config::TslConfig;
use crate::errors::Result;
use crate::positions::{
    account_peak_prices, aggregate_account_positions, aggregate_consolidated_positions,
    consolidated_peak_prices, Position, PositionScope,
};
use crate::snapshots::SnapshotRepositoryTrait;
use crate::tsl;

/// The engine's public entry point.
#[async_trait]
pub trait TslSignalServiceTrait: Send + Sync {
    /// Computes the per-account and consolidated recommendation sets for a
    /// target date. `None` resolves to the latest date with stored
    /// snapshots. A date with no data yields an explicitly empty set.
    async fn compute_signals(&self, target_date: Option<NaiveDate>) -> Result<SignalSet>;

    /// The aggregated positions for a target date, without decisioning.
    async fn get_positions(&self, target_date: Option<NaiveDate>) -> Result<PositionSet>;
}

/// Computes trailing-stop-loss signals from an already-materialized
/// snapshot store.
///
/// The service is read-only over its input and produces fresh, unshared
/// output per call; concurrent runs for different dates are independent.
pub struct TslSignalService {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    config: TslConfig,
}

impl TslSignalService {
    pub fn new(snapshot_repository: Arc<dyn SnapshotRepositoryTrait>, config: TslConfig) -> Self {
        Self {
            snapshot_repository,
            config,
        }
    }

    fn resolve_target_date(&self, target_date: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
        match target_date {
            Some(date) => Ok(Some(date)),
            None => self.snapshot_repository.get_latest_snapshot_date(),
        }
    }

    /// Loads both snapshot slices and derives peak-annotated positions.
    /// Both reads complete before any computation begins, so every
    /// position is decided against one consistent snapshot set.
    fn build_positions(&self, target_date: NaiveDate) -> Result<(Vec<Position>, Vec<Position>)> {
        let current = self.snapshot_repository.get_snapshots_on_date(target_date)?;
        let history = self
            .snapshot_repository
            .get_snapshots_through_date(target_date)?;
        let excluded = &self.config.excluded_symbols;

        let mut per_account = aggregate_account_positions(&current, target_date, excluded);
        let account_peaks = account_peak_prices(&history, target_date, excluded);
        for position in &mut per_account {
            if let PositionScope::Account(account_id) = &position.scope {
                position.peak_price = account_peaks
                    .get(&(account_id.clone(), position.symbol.clone()))
                    .copied();
            }
        }

        let mut consolidated = aggregate_consolidated_positions(&current, target_date, excluded);
        let symbol_peaks = consolidated_peak_prices(&history, target_date, excluded);
        for position in &mut consolidated {
            position.peak_price = symbol_peaks.get(&position.symbol).copied();
        }

        Ok((per_account, consolidated))
    }
}

/// Runs the decision policy for one position and assembles the signal row.
fn build_signal(position: &Position) -> TslSignal {
    let decision = tsl::evaluate(
        position.average_cost,
        position.last_price,
        position.peak_price,
        position.quantity,
    );

    let quantity = Decimal::from(position.quantity);
    let last_price = position.last_price.unwrap_or(Decimal::ZERO);
    let value = quantity * last_price;
    let pnl_amount = quantity * (last_price - position.average_cost);

    TslSignal {
        scope: position.scope.clone(),
        symbol: position.symbol.clone(),
        quantity: position.quantity,
        average_cost: position.average_cost,
        last_price: position.last_price,
        peak_price: position.peak_price,
        value,
        pnl_amount,
        action: decision.action,
        exit_fraction: decision.exit_fraction,
        exit_qty: decision.exit_qty,
        pnl_pct: decision.pnl_pct,
        loss_pct: decision.loss_pct,
        drawdown_pct: decision.drawdown_pct,
        allocations: Vec::new(),
    }
}

#[async_trait]
impl TslSignalServiceTrait for TslSignalService {
    async fn compute_signals(&self, target_date: Option<NaiveDate>) -> Result<SignalSet> {
        let Some(target_date) = self.resolve_target_date(target_date)? else {
            debug!("Snapshot store is empty. Returning empty signal set.");
            return Ok(SignalSet::empty());
        };
        debug!("Computing trailing stop signals as of {}", target_date);

        let (per_account_positions, consolidated_positions) =
            self.build_positions(target_date)?;

        // Contributions per symbol, in per-account aggregation order. The
        // order fixes the allocation tie-break, so it must stay aligned
        // with the per-account signal rows.
        let mut contributions: HashMap<String, Vec<AccountHolding>> = HashMap::new();
        for position in &per_account_positions {
            if let Some(account_id) = position.scope.account_id() {
                contributions
                    .entry(position.symbol.clone())
                    .or_default()
                    .push(AccountHolding::new(account_id, position.quantity));
            }
        }

        let per_account: Vec<TslSignal> =
            per_account_positions.iter().map(build_signal).collect();

        let consolidated: Vec<TslSignal> = consolidated_positions
            .iter()
            .map(|position| {
                let mut signal = build_signal(position);
                if signal.exit_qty > 0 {
                    if let Some(holders) = contributions.get(&position.symbol) {
                        signal.allocations = distribute_exit_quantity(signal.exit_qty, holders);
                    }
                }
                signal
            })
            .collect();

        Ok(SignalSet {
            as_of_date: Some(target_date),
            per_account,
            consolidated,
        })
    }

    async fn get_positions(&self, target_date: Option<NaiveDate>) -> Result<PositionSet> {
        let Some(target_date) = self.resolve_target_date(target_date)? else {
            debug!("Snapshot store is empty. Returning empty position set.");
            return Ok(PositionSet::empty());
        };

        let (per_account, consolidated) = self.build_positions(target_date)?;
        Ok(PositionSet {
            as_of_date: Some(target_date),
            per_account,
            consolidated,
        })
    }
}
