//! Property-based tests for derived analytics.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::trial_balance::{AccountEntry, ScheduleService};

use super::service::AnalyticsService;

/// Strategy for amounts in cents (-1,000,000.00 to 1,000,000.00).
fn amount_cents() -> impl Strategy<Value = i64> {
    -100_000_000i64..100_000_000i64
}

/// Strategy for normalized entries across all leading digits.
fn entries() -> impl Strategy<Value = Vec<AccountEntry>> {
    prop::collection::vec(
        (
            prop::string::string_regex("[0-9][0-9]{3}").expect("valid regex"),
            amount_cents(),
        )
            .prop_map(|(account_no, cents)| AccountEntry {
                account_no,
                account_name: "Generated account".to_string(),
                balance: Decimal::new(cents, 2),
            }),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* schedules, the materiality estimate never drops below the
    /// absolute floor.
    #[test]
    fn prop_materiality_never_below_floor(entries in entries()) {
        let schedules = ScheduleService::generate(&entries);
        let snapshot = AnalyticsService::compute(&schedules);
        prop_assert!(snapshot.materiality >= Decimal::from(5000));
    }

    /// *For any* schedules, the current ratio is the sentinel exactly when
    /// the liabilities total is zero.
    #[test]
    fn prop_current_ratio_sentinel_iff_zero_liabilities(entries in entries()) {
        let schedules = ScheduleService::generate(&entries);
        let snapshot = AnalyticsService::compute(&schedules);
        prop_assert_eq!(
            snapshot.current_ratio.is_applicable(),
            !schedules.liabilities.total.is_zero()
        );
    }

    /// *For any* schedules, the gross margin is the sentinel exactly when
    /// the revenue total is zero.
    #[test]
    fn prop_gross_margin_sentinel_iff_zero_revenue(entries in entries()) {
        let schedules = ScheduleService::generate(&entries);
        let snapshot = AnalyticsService::compute(&schedules);
        prop_assert_eq!(
            snapshot.gross_margin.is_applicable(),
            !schedules.revenue.total.is_zero()
        );
    }

    /// *For any* schedules, recomputation is deterministic.
    #[test]
    fn prop_compute_is_deterministic(entries in entries()) {
        let schedules = ScheduleService::generate(&entries);
        prop_assert_eq!(
            AnalyticsService::compute(&schedules),
            AnalyticsService::compute(&schedules)
        );
    }

    /// *For any* schedules with liabilities, the current ratio denominator
    /// is treated as a magnitude: the sign of the liabilities total does not
    /// change the ratio.
    #[test]
    fn prop_current_ratio_ignores_liability_sign(entries in entries()) {
        let schedules = ScheduleService::generate(&entries);
        prop_assume!(!schedules.liabilities.total.is_zero());

        let mut flipped = schedules.clone();
        flipped.liabilities.total = -flipped.liabilities.total;

        let lhs = AnalyticsService::compute(&schedules).current_ratio;
        let rhs = AnalyticsService::compute(&flipped).current_ratio;
        prop_assert_eq!(lhs, rhs);
        prop_assert!(lhs.is_applicable());
    }
}
