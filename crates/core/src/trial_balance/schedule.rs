//! Lead schedule generation.

use super::normalize::RowNormalizer;
use super::types::{AccountEntry, LeadSchedules, RawRow, StatementGroup};

/// Stateless service that buckets normalized entries into lead schedules.
pub struct ScheduleService;

impl ScheduleService {
    /// Buckets entries into the five statement groups in a single pass.
    ///
    /// Accounts keep their input order inside each group, and every call
    /// starts from fresh accumulators, so concurrent invocations over
    /// different row sets share no state.
    #[must_use]
    pub fn generate(entries: &[AccountEntry]) -> LeadSchedules {
        let mut schedules = LeadSchedules::default();
        for entry in entries {
            let schedule = schedules.group_mut(StatementGroup::for_account(&entry.account_no));
            schedule.total += entry.balance;
            schedule.accounts.push(entry.clone());
        }
        schedules
    }

    /// Normalizes raw rows and buckets them in one step.
    #[must_use]
    pub fn from_rows(rows: &[RawRow]) -> LeadSchedules {
        Self::generate(&RowNormalizer::normalize_rows(rows))
    }
}
