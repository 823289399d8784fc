//! Analytics domain types.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

/// A derived ratio that is undefined when its denominator is zero.
///
/// Serializes as the decimal value, or as the string `"N/A"` when not
/// applicable, so an undefined ratio is never confused with a zero result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ratio {
    /// A computed value.
    Value(Decimal),
    /// The denominator was zero.
    NotApplicable,
}

impl Ratio {
    /// Returns true when the ratio carries a value.
    #[must_use]
    pub const fn is_applicable(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Rounds the value to `dp` decimal places for presentation, midpoints
    /// away from zero. Not-applicable passes through unchanged.
    #[must_use]
    pub fn round_dp(&self, dp: u32) -> Self {
        match self {
            Self::Value(v) => Self::Value(
                v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
            ),
            Self::NotApplicable => Self::NotApplicable,
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serde::Serialize::serialize(v, serializer),
            Self::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

/// Derived indicators recomputed from a set of lead schedules.
///
/// Never cached and never persisted independently of its source schedules;
/// recomputation is cheap and avoids staleness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    /// Net result for the period: revenue total plus signed expense total.
    pub profit: Decimal,
    /// Estimated materiality threshold.
    pub materiality: Decimal,
    /// Liquidity indicator: assets over absolute liabilities.
    pub current_ratio: Ratio,
    /// Profit as a percentage of revenue.
    pub gross_margin: Ratio,
}
