#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    use crate::config::TslConfig;
    use crate::constants::DEFAULT_CASH_SWEEP_SYMBOL;
    use crate::errors::{Error, Result};
    use crate::positions::PositionScope;
    use crate::signals::{TslSignalService, TslSignalServiceTrait};
    use crate::snapshots::{HoldingSnapshot, SnapshotRepositoryTrait};
    use crate::tsl::TslAction;

    struct MockSnapshotRepository {
        rows: Vec<HoldingSnapshot>,
    }

    impl MockSnapshotRepository {
        fn new(rows: Vec<HoldingSnapshot>) -> Self {
            Self { rows }
        }
    }

    impl SnapshotRepositoryTrait for MockSnapshotRepository {
        fn get_snapshots_on_date(&self, date: NaiveDate) -> Result<Vec<HoldingSnapshot>> {
            Ok(self
                .rows
                .iter()
                .filter(|r| r.as_of_date == date)
                .cloned()
                .collect())
        }

        fn get_snapshots_through_date(&self, date: NaiveDate) -> Result<Vec<HoldingSnapshot>> {
            Ok(self
                .rows
                .iter()
                .filter(|r| r.as_of_date <= date)
                .cloned()
                .collect())
        }

        fn get_latest_snapshot_date(&self) -> Result<Option<NaiveDate>> {
            Ok(self.rows.iter().map(|r| r.as_of_date).max())
        }
    }

    struct FailingSnapshotRepository;

    impl SnapshotRepositoryTrait for FailingSnapshotRepository {
        fn get_snapshots_on_date(&self, _date: NaiveDate) -> Result<Vec<HoldingSnapshot>> {
            Err(Error::Repository("holdings store offline".to_string()))
        }

        fn get_snapshots_through_date(&self, _date: NaiveDate) -> Result<Vec<HoldingSnapshot>> {
            Err(Error::Repository("holdings store offline".to_string()))
        }

        fn get_latest_snapshot_date(&self) -> Result<Option<NaiveDate>> {
            Err(Error::Repository("holdings store offline".to_string()))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snap(
        account: &str,
        symbol: &str,
        quantity: i64,
        average_cost: Decimal,
        last_price: Option<Decimal>,
        as_of: NaiveDate,
    ) -> HoldingSnapshot {
        HoldingSnapshot::new(
            account,
            symbol,
            quantity,
            average_cost,
            last_price,
            as_of,
            as_of.and_hms_opt(18, 0, 0).unwrap(),
        )
    }

    fn service(rows: Vec<HoldingSnapshot>) -> TslSignalService {
        TslSignalService::new(
            Arc::new(MockSnapshotRepository::new(rows)),
            TslConfig::default(),
        )
    }

    #[tokio::test]
    async fn consolidated_exit_is_allocated_across_accounts() {
        let target = date(2024, 3, 1);
        // 22% below cost everywhere: consolidated exit_all of 10 units.
        let rows = vec![
            snap("A", "INFY", 3, dec!(100), Some(dec!(78)), target),
            snap("B", "INFY", 3, dec!(100), Some(dec!(78)), target),
            snap("C", "INFY", 4, dec!(100), Some(dec!(78)), target),
        ];

        let signals = service(rows).compute_signals(Some(target)).await.unwrap();

        assert_eq!(signals.as_of_date, Some(target));
        assert_eq!(signals.per_account.len(), 3);
        assert_eq!(signals.consolidated.len(), 1);

        let consolidated = &signals.consolidated[0];
        assert_eq!(consolidated.scope, PositionScope::Consolidated);
        assert_eq!(consolidated.action, TslAction::ExitAll);
        assert_eq!(consolidated.quantity, 10);
        assert_eq!(consolidated.exit_qty, 10);

        let allocated: Vec<(String, i64)> = consolidated
            .allocations
            .iter()
            .map(|a| (a.account_id.clone(), a.qty))
            .collect();
        assert_eq!(
            allocated,
            vec![
                ("A".to_string(), 3),
                ("B".to_string(), 3),
                ("C".to_string(), 4),
            ]
        );

        // Per-account rows never carry allocations.
        assert!(signals.per_account.iter().all(|s| s.allocations.is_empty()));
    }

    #[tokio::test]
    async fn consolidated_quantity_round_trips_account_positions() {
        let target = date(2024, 3, 1);
        let rows = vec![
            snap("A", "INFY", 10, dec!(100), Some(dec!(104)), target),
            snap("B", "INFY", 30, dec!(120), Some(dec!(105)), target),
            snap("A", "TCS", 7, dec!(3000), Some(dec!(3100)), target),
        ];

        let signals = service(rows).compute_signals(Some(target)).await.unwrap();

        for consolidated in &signals.consolidated {
            let account_sum: i64 = signals
                .per_account
                .iter()
                .filter(|s| s.symbol == consolidated.symbol)
                .map(|s| s.quantity)
                .sum();
            assert_eq!(consolidated.quantity, account_sum);
        }
    }

    #[tokio::test]
    async fn historical_peak_drives_drawdown_exit() {
        let target = date(2024, 3, 1);
        let rows = vec![
            // Peak of 150 observed a month earlier.
            snap("A", "INFY", 50, dec!(100), Some(dec!(150)), date(2024, 2, 1)),
            // In profit today, but 28% off the peak.
            snap("A", "INFY", 50, dec!(100), Some(dec!(108)), target),
        ];

        let signals = service(rows).compute_signals(Some(target)).await.unwrap();

        let signal = &signals.per_account[0];
        assert_eq!(signal.peak_price, Some(dec!(150)));
        assert_eq!(signal.drawdown_pct, Some(dec!(28)));
        assert_eq!(signal.action, TslAction::ExitAll);
        assert_eq!(signal.exit_qty, 50);
    }

    #[tokio::test]
    async fn resolves_missing_target_date_to_latest() {
        let rows = vec![
            snap("A", "INFY", 10, dec!(100), Some(dec!(78)), date(2024, 2, 28)),
            snap("A", "INFY", 10, dec!(100), Some(dec!(110)), date(2024, 3, 1)),
        ];

        let signals = service(rows).compute_signals(None).await.unwrap();

        assert_eq!(signals.as_of_date, Some(date(2024, 3, 1)));
        assert_eq!(signals.per_account.len(), 1);
        assert_eq!(signals.per_account[0].last_price, Some(dec!(110)));
    }

    #[tokio::test]
    async fn empty_store_yields_empty_signal_set() {
        let signals = service(Vec::new()).compute_signals(None).await.unwrap();

        assert_eq!(signals.as_of_date, None);
        assert!(signals.is_empty());
    }

    #[tokio::test]
    async fn date_without_data_yields_empty_lists() {
        let rows = vec![snap(
            "A",
            "INFY",
            10,
            dec!(100),
            Some(dec!(110)),
            date(2024, 3, 1),
        )];

        let signals = service(rows)
            .compute_signals(Some(date(2024, 3, 2)))
            .await
            .unwrap();

        assert_eq!(signals.as_of_date, Some(date(2024, 3, 2)));
        assert!(signals.is_empty());
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let service = TslSignalService::new(
            Arc::new(FailingSnapshotRepository),
            TslConfig::default(),
        );

        let err = service.compute_signals(None).await.unwrap_err();
        assert!(matches!(err, Error::Repository(_)));
    }

    #[tokio::test]
    async fn cash_sweep_symbol_never_reaches_the_output() {
        let target = date(2024, 3, 1);
        let rows = vec![
            snap("A", DEFAULT_CASH_SWEEP_SYMBOL, 5000, dec!(1), Some(dec!(1)), target),
            snap("A", "INFY", 10, dec!(100), Some(dec!(110)), target),
        ];

        let signals = service(rows).compute_signals(Some(target)).await.unwrap();

        assert!(signals
            .per_account
            .iter()
            .chain(signals.consolidated.iter())
            .all(|s| s.symbol != DEFAULT_CASH_SWEEP_SYMBOL));
        assert_eq!(signals.per_account.len(), 1);
        assert_eq!(signals.consolidated.len(), 1);
    }

    #[tokio::test]
    async fn missing_data_positions_appear_as_hold_rows() {
        let target = date(2024, 3, 1);
        let rows = vec![
            // Unknown cost basis: still a row in the output.
            snap("A", "BONUSSHARE", 10, dec!(0), Some(dec!(50)), target),
            // No price either: degraded hold with unset metrics.
            snap("A", "UNLISTED", 4, dec!(200), None, target),
        ];

        let signals = service(rows).compute_signals(Some(target)).await.unwrap();

        assert_eq!(signals.per_account.len(), 2);
        for signal in &signals.per_account {
            assert_eq!(signal.action, TslAction::Hold);
            assert_eq!(signal.pnl_pct, None);
            assert_eq!(signal.loss_pct, None);
        }

        let unpriced = signals
            .per_account
            .iter()
            .find(|s| s.symbol == "UNLISTED")
            .unwrap();
        assert_eq!(unpriced.value, Decimal::ZERO);
    }

    #[tokio::test]
    async fn signal_rows_carry_value_and_unrealized_pnl() {
        let target = date(2024, 3, 1);
        let rows = vec![snap("A", "INFY", 10, dec!(100), Some(dec!(110)), target)];

        let signals = service(rows).compute_signals(Some(target)).await.unwrap();

        let signal = &signals.per_account[0];
        assert_eq!(signal.value, dec!(1100));
        assert_eq!(signal.pnl_amount, dec!(100));
    }

    #[tokio::test]
    async fn position_overview_is_decision_free_but_peak_annotated() {
        let target = date(2024, 3, 1);
        let rows = vec![
            snap("A", "INFY", 10, dec!(100), Some(dec!(140)), date(2024, 1, 15)),
            snap("A", "INFY", 10, dec!(100), Some(dec!(110)), target),
        ];

        let positions = service(rows).get_positions(Some(target)).await.unwrap();

        assert_eq!(positions.as_of_date, Some(target));
        assert_eq!(positions.per_account.len(), 1);
        assert_eq!(positions.per_account[0].peak_price, Some(dec!(140)));
        assert_eq!(positions.consolidated.len(), 1);
        assert_eq!(positions.consolidated[0].peak_price, Some(dec!(140)));
    }
}
