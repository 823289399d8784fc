//! Trial balance normalization, classification and lead schedules.
//!
//! The import pipeline runs raw spreadsheet rows through three pure stages:
//! normalization ([`RowNormalizer`]), first-digit classification
//! ([`StatementGroup::for_account`]) and aggregation ([`ScheduleService`]).
//! Every stage is total: malformed input degrades to defaults instead of
//! failing.
//!
//! # Modules
//!
//! - `types` - Raw rows, normalized entries, statement groups, schedules
//! - `normalize` - Field-alias resolution and defensive value parsing
//! - `schedule` - Single-pass bucketing into the five statement groups

pub mod normalize;
pub mod schedule;
pub mod types;

#[cfg(test)]
mod props;

pub use normalize::RowNormalizer;
pub use schedule::ScheduleService;
pub use types::{ACCOUNT_NO_WIDTH, AccountEntry, LeadSchedule, LeadSchedules, RawRow, StatementGroup};
