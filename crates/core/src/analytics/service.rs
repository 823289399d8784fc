//! Derived financial indicators.

use rust_decimal::Decimal;

use crate::trial_balance::LeadSchedules;

use super::types::{AnalyticsSnapshot, Ratio};

/// Absolute materiality floor, in currency units.
const MATERIALITY_FLOOR: i64 = 5000;

/// Stateless calculator for trial balance analytics.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Computes the analytics snapshot for a set of lead schedules.
    ///
    /// All four outputs are pure functions of the schedules, kept at full
    /// precision; presentation rounding is the caller's concern. Expense
    /// balances are negative by construction (debit minus credit), so
    /// `profit = revenue.total + expenses.total` nets revenue against the
    /// expense magnitude.
    #[must_use]
    pub fn compute(schedules: &LeadSchedules) -> AnalyticsSnapshot {
        let profit = schedules.revenue.total + schedules.expenses.total;

        // Three-way floor: 5% of absolute profit, 1% of total assets, 5000.
        let materiality = (profit.abs() * Decimal::new(5, 2))
            .max(schedules.assets.total * Decimal::new(1, 2))
            .max(Decimal::from(MATERIALITY_FLOOR));

        let current_ratio = if schedules.liabilities.total.is_zero() {
            Ratio::NotApplicable
        } else {
            Ratio::Value(schedules.assets.total / schedules.liabilities.total.abs())
        };

        let gross_margin = if schedules.revenue.total.is_zero() {
            Ratio::NotApplicable
        } else {
            Ratio::Value(profit / schedules.revenue.total * Decimal::ONE_HUNDRED)
        };

        AnalyticsSnapshot {
            profit,
            materiality,
            current_ratio,
            gross_margin,
        }
    }
}
