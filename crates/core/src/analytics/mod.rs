//! Derived financial indicators for an imported trial balance.
//!
//! Analytics are a pure recomputation from lead schedules rather than a
//! stored, invalidate-on-write cache; recomputation cost is negligible and
//! staleness is impossible.
//!
//! # Modules
//!
//! - `types` - Snapshot and the not-applicable ratio sentinel
//! - `service` - Profit, materiality, current ratio and gross margin

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::AnalyticsService;
pub use types::{AnalyticsSnapshot, Ratio};
