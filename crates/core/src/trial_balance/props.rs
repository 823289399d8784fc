//! Property-based tests for normalization and lead schedule generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value;

use super::normalize::{RowNormalizer, pad_account_no};
use super::schedule::ScheduleService;
use super::types::{RawRow, StatementGroup};

/// Strategy for account numbers: digits, letters or empty.
fn account_no() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-Za-z]{0,6}").expect("valid regex")
}

/// Strategy for amounts in cents (-1,000,000.00 to 1,000,000.00).
fn amount_cents() -> impl Strategy<Value = i64> {
    -100_000_000i64..100_000_000i64
}

/// Strategy for a raw row under either accepted field spelling.
fn raw_row() -> impl Strategy<Value = RawRow> {
    (account_no(), amount_cents(), amount_cents(), any::<bool>()).prop_map(
        |(no, debit, credit, camel_case)| {
            let (no_key, debit_key, credit_key) = if camel_case {
                ("accountNo", "debit", "credit")
            } else {
                ("Account No", "Debit", "Credit")
            };
            let mut row = RawRow::new();
            row.insert(no_key.to_string(), Value::String(no));
            row.insert(
                debit_key.to_string(),
                Value::String(Decimal::new(debit, 2).to_string()),
            );
            row.insert(
                credit_key.to_string(),
                Value::String(Decimal::new(credit, 2).to_string()),
            );
            row
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* row set, normalization yields exactly one entry per row.
    #[test]
    fn prop_one_entry_per_row(rows in prop::collection::vec(raw_row(), 0..40)) {
        prop_assert_eq!(RowNormalizer::normalize_rows(&rows).len(), rows.len());
    }

    /// *For any* row set, the sum of group totals equals the sum of entry
    /// balances: grouping conserves the total balance.
    #[test]
    fn prop_total_balance_is_conserved(rows in prop::collection::vec(raw_row(), 0..40)) {
        let entries = RowNormalizer::normalize_rows(&rows);
        let entry_total: Decimal = entries.iter().map(|e| e.balance).sum();
        let schedules = ScheduleService::generate(&entries);
        prop_assert_eq!(schedules.combined_total(), entry_total);
    }

    /// *For any* account number, padding is idempotent: re-padding an
    /// already padded number changes neither the number nor its group.
    #[test]
    fn prop_padding_is_idempotent(no in account_no()) {
        let padded = pad_account_no(&no);
        prop_assert_eq!(&pad_account_no(&padded), &padded);
        prop_assert_eq!(
            StatementGroup::for_account(&pad_account_no(&padded)),
            StatementGroup::for_account(&padded)
        );
    }

    /// *For any* four-digit number, the leading digit alone decides the
    /// group, with everything outside `1`-`4` landing in expenses.
    #[test]
    fn prop_leading_digit_decides_group(no in prop::string::string_regex("[0-9][0-9]{3}").expect("valid regex")) {
        let expected = match no.as_bytes()[0] {
            b'1' => StatementGroup::Assets,
            b'2' => StatementGroup::Liabilities,
            b'3' => StatementGroup::Equity,
            b'4' => StatementGroup::Revenue,
            _ => StatementGroup::Expenses,
        };
        prop_assert_eq!(StatementGroup::for_account(&no), expected);
    }

    /// *For any* row set, every normalized entry appears in exactly one
    /// schedule.
    #[test]
    fn prop_every_entry_is_bucketed_once(rows in prop::collection::vec(raw_row(), 0..40)) {
        let entries = RowNormalizer::normalize_rows(&rows);
        let schedules = ScheduleService::generate(&entries);
        let bucketed: usize = schedules.iter().map(|(_, s)| s.accounts.len()).sum();
        prop_assert_eq!(bucketed, entries.len());
    }
}
