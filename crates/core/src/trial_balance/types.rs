//! Trial balance domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw imported row: a loosely typed field-name/value mapping as produced
/// by the external spreadsheet parser.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

/// Minimum width account numbers are left-padded to.
pub const ACCOUNT_NO_WIDTH: usize = 4;

/// A normalized trial balance line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    /// Account number, zero-padded to at least four characters.
    pub account_no: String,
    /// Account description, `"Unknown"` when the source row has none.
    pub account_name: String,
    /// Net balance (debit minus credit).
    pub balance: Decimal,
}

/// Financial statement group an account classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementGroup {
    /// Accounts whose padded number starts with `1`.
    Assets,
    /// Accounts whose padded number starts with `2`.
    Liabilities,
    /// Accounts whose padded number starts with `3`.
    Equity,
    /// Accounts whose padded number starts with `4`.
    Revenue,
    /// Every other account, including non-numeric numbers.
    Expenses,
}

impl StatementGroup {
    /// All groups, in statement order.
    pub const ALL: [Self; 5] = [
        Self::Assets,
        Self::Liabilities,
        Self::Equity,
        Self::Revenue,
        Self::Expenses,
    ];

    /// Classifies an account number by its first character.
    ///
    /// Total over every input: anything that does not start with `1`-`4`
    /// (including the empty string and non-digit prefixes) falls back to
    /// expenses rather than failing.
    #[must_use]
    pub fn for_account(account_no: &str) -> Self {
        match account_no.chars().next() {
            Some('1') => Self::Assets,
            Some('2') => Self::Liabilities,
            Some('3') => Self::Equity,
            Some('4') => Self::Revenue,
            _ => Self::Expenses,
        }
    }

    /// Returns the string representation of the group.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Liabilities => "liabilities",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expenses => "expenses",
        }
    }

    /// Parses a group from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "assets" => Some(Self::Assets),
            "liabilities" => Some(Self::Liabilities),
            "equity" => Some(Self::Equity),
            "revenue" => Some(Self::Revenue),
            "expenses" => Some(Self::Expenses),
            _ => None,
        }
    }
}

impl fmt::Display for StatementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One lead schedule: the accounts of a statement group with their total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSchedule {
    /// Sum of member balances.
    pub total: Decimal,
    /// Member accounts, in input order.
    pub accounts: Vec<AccountEntry>,
}

/// Lead schedules for all five statement groups.
///
/// Built fresh for every import; a new upload fully replaces the previous
/// schedules, it never merges into them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSchedules {
    /// Asset accounts.
    pub assets: LeadSchedule,
    /// Liability accounts.
    pub liabilities: LeadSchedule,
    /// Equity accounts.
    pub equity: LeadSchedule,
    /// Revenue accounts.
    pub revenue: LeadSchedule,
    /// Expense accounts, including the classification fallback.
    pub expenses: LeadSchedule,
}

impl LeadSchedules {
    /// Returns the schedule for a statement group.
    #[must_use]
    pub fn group(&self, group: StatementGroup) -> &LeadSchedule {
        match group {
            StatementGroup::Assets => &self.assets,
            StatementGroup::Liabilities => &self.liabilities,
            StatementGroup::Equity => &self.equity,
            StatementGroup::Revenue => &self.revenue,
            StatementGroup::Expenses => &self.expenses,
        }
    }

    pub(crate) fn group_mut(&mut self, group: StatementGroup) -> &mut LeadSchedule {
        match group {
            StatementGroup::Assets => &mut self.assets,
            StatementGroup::Liabilities => &mut self.liabilities,
            StatementGroup::Equity => &mut self.equity,
            StatementGroup::Revenue => &mut self.revenue,
            StatementGroup::Expenses => &mut self.expenses,
        }
    }

    /// Iterates the schedules in statement order.
    pub fn iter(&self) -> impl Iterator<Item = (StatementGroup, &LeadSchedule)> {
        StatementGroup::ALL.into_iter().map(|g| (g, self.group(g)))
    }

    /// Sum of all group totals.
    #[must_use]
    pub fn combined_total(&self) -> Decimal {
        self.iter().map(|(_, schedule)| schedule.total).sum()
    }
}
