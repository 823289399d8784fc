//! Raw row normalization.
//!
//! Turns the loosely typed rows of an imported spreadsheet into canonical
//! account entries. The normalizer is defensively total: every input row
//! yields exactly one entry, malformed amounts read as zero and missing
//! descriptions get a placeholder. Field-name aliases are resolved here and
//! nowhere else.

use rust_decimal::Decimal;
use serde_json::Value;

use super::types::{ACCOUNT_NO_WIDTH, AccountEntry, RawRow};

/// Accepted spellings for the account number column.
const ACCOUNT_NO_FIELDS: [&str; 2] = ["Account No", "accountNo"];
/// Accepted spellings for the account description column.
const ACCOUNT_NAME_FIELDS: [&str; 2] = ["Account Description", "accountName"];
/// Accepted spellings for the debit column.
const DEBIT_FIELDS: [&str; 2] = ["Debit", "debit"];
/// Accepted spellings for the credit column.
const CREDIT_FIELDS: [&str; 2] = ["Credit", "credit"];

/// Placeholder description for rows without one.
const UNKNOWN_ACCOUNT_NAME: &str = "Unknown";

/// Stateless normalizer for imported trial balance rows.
pub struct RowNormalizer;

impl RowNormalizer {
    /// Normalizes a batch of raw rows.
    ///
    /// Produces exactly one entry per input row; rows are never dropped or
    /// merged at this stage.
    #[must_use]
    pub fn normalize_rows(rows: &[RawRow]) -> Vec<AccountEntry> {
        rows.iter().map(Self::normalize_row).collect()
    }

    /// Normalizes a single row.
    #[must_use]
    pub fn normalize_row(row: &RawRow) -> AccountEntry {
        let debit = amount(row, &DEBIT_FIELDS);
        let credit = amount(row, &CREDIT_FIELDS);
        let account_no = pad_account_no(&text(row, &ACCOUNT_NO_FIELDS).unwrap_or_default());
        let account_name =
            text(row, &ACCOUNT_NAME_FIELDS).unwrap_or_else(|| UNKNOWN_ACCOUNT_NAME.to_string());

        AccountEntry {
            account_no,
            account_name,
            balance: debit - credit,
        }
    }
}

/// Left-pads an account number with zeros to the minimum width.
///
/// Numbers already at or beyond the width pass through untouched; padding is
/// never a truncation.
pub(crate) fn pad_account_no(raw: &str) -> String {
    format!("{raw:0>width$}", width = ACCOUNT_NO_WIDTH)
}

fn field<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| row.get(*key))
}

/// Reads a monetary amount, treating absent or unparsable cells as zero.
fn amount(row: &RawRow, aliases: &[&str]) -> Decimal {
    match field(row, aliases) {
        Some(Value::Number(number)) => number.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Reads a text field, coercing numeric cells to their decimal rendering
/// (an integral `1001.0` becomes `"1001"`).
fn text(row: &RawRow, aliases: &[&str]) -> Option<String> {
    match field(row, aliases) {
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(number)) => {
            let rendered = number.to_string();
            Some(
                rendered
                    .parse::<Decimal>()
                    .map_or(rendered, |d| d.normalize().to_string()),
            )
        }
        _ => None,
    }
}
