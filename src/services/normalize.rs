//! Row normalization
//!
//! Turns heterogeneous raw import rows (localized field names, mixed date
//! formats, locale-specific decimal separators) into canonical transactions.
//! Normalization is total: malformed fields degrade to defaults and a single
//! row never fails. Batch-level failures (an unreadable file) are the
//! importer's concern, not the normalizer's.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Money, Transaction, NO_DESCRIPTION};

/// A raw import row: header name to field value
pub type RawRow = BTreeMap<String, String>;

/// Accepted header aliases, per field
const DATE_ALIASES: [&str; 2] = ["date", "data"];
const AMOUNT_ALIASES: [&str; 2] = ["amount", "valor"];
const DESCRIPTION_ALIASES: [&str; 4] = ["description", "descricao", "details", "history"];
const CATEGORY_ALIASES: [&str; 2] = ["category", "categoria"];

/// Normalize a raw row into a canonical transaction
///
/// Field lookup is case-insensitive over the alias lists. The original row
/// is retained on the record's `raw` field for audit; unrecognized columns
/// are preserved there and otherwise ignored.
pub fn normalize_row(row: &RawRow) -> Transaction {
    let date = field(row, &DATE_ALIASES)
        .and_then(parse_date)
        .unwrap_or_else(today);

    let amount = field(row, &AMOUNT_ALIASES)
        .map(parse_amount)
        .unwrap_or_else(Money::zero);

    let description = field(row, &DESCRIPTION_ALIASES)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_DESCRIPTION)
        .to_string();

    // Missing category stays unset so the rule engine can still classify it
    let category = field(row, &CATEGORY_ALIASES)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let mut txn = Transaction::new(date, amount, description);
    txn.category = category;
    txn.raw = Some(row.clone());
    txn
}

/// Look up the first matching alias in the row, case-insensitively
fn field<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    for alias in aliases {
        if let Some((_, value)) = row
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(alias))
        {
            return Some(value.trim());
        }
    }
    None
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a raw date string
///
/// Priority order matters: the exact `YYYY-MM-DD` shape wins, then exact
/// `DD/MM/YYYY` rearranged, then generic format attempts. `None` means the
/// caller falls back to the current date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if is_iso_shape(s) {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }
    }

    if is_slash_shape(s) {
        // DD/MM/YYYY rearranged to YYYY-MM-DD
        let rearranged = format!("{}-{}-{}", &s[6..10], &s[3..5], &s[0..2]);
        if let Ok(date) = NaiveDate::parse_from_str(&rearranged, "%Y-%m-%d") {
            return Some(date);
        }
    }

    // Generic attempts for anything else
    for format in ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}

/// `YYYY-MM-DD`: ten chars, dashes at 4 and 7, digits elsewhere
fn is_iso_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// `DD/MM/YYYY`: ten chars, slashes at 2 and 5, digits elsewhere
fn is_slash_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit())
}

/// Parse a locale-formatted amount string, degrading to zero
///
/// Both `.` and `,` present: `.` is a thousands separator (stripped) and
/// `,` the decimal separator. Only `,`: decimal separator. Otherwise the
/// string is taken as a plain decimal. A leading `-` is preserved.
pub fn parse_amount(s: &str) -> Money {
    let normalized = if s.contains('.') && s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else if s.contains(',') {
        s.replace(',', ".")
    } else {
        s.to_string()
    };

    // Drop currency symbols and grouping spaces before the strict parse
    let cleaned: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Money::parse(&cleaned).unwrap_or_else(|_| Money::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_localized_row() {
        let txn = normalize_row(&row(&[
            ("Data", "15/09/2025"),
            ("Valor", "1.234,56"),
            ("Descricao", "Mercado Central"),
        ]));

        assert_eq!(txn.date, date(2025, 9, 15));
        assert_eq!(txn.amount.cents(), 123456);
        assert_eq!(txn.description, "Mercado Central");
        assert!(txn.category.is_none());
    }

    #[test]
    fn test_iso_date_kept() {
        let txn = normalize_row(&row(&[("date", "2025-09-15"), ("amount", "723,11")]));
        assert_eq!(txn.date, date(2025, 9, 15));
        assert_eq!(txn.amount.cents(), 72311);
    }

    #[test]
    fn test_date_priority_iso_before_slash() {
        // The exact ISO shape must win before any generic attempt
        assert_eq!(parse_date("2025-09-15"), Some(date(2025, 9, 15)));
        assert_eq!(parse_date("15/09/2025"), Some(date(2025, 9, 15)));
        // Generic fallback still handles other shapes
        assert_eq!(parse_date("2025/09/15"), Some(date(2025, 9, 15)));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_missing_date_falls_back_to_today() {
        let txn = normalize_row(&row(&[("amount", "10")]));
        assert_eq!(txn.date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_amount_conventions() {
        assert_eq!(parse_amount("1.234,56").cents(), 123456);
        assert_eq!(parse_amount("723,11").cents(), 72311);
        assert_eq!(parse_amount("723.11").cents(), 72311);
        assert_eq!(parse_amount("1000").cents(), 100000);
        assert_eq!(parse_amount("-1.234,56").cents(), -123456);
        assert_eq!(parse_amount("R$ 12,50").cents(), 1250);
    }

    #[test]
    fn test_unparseable_amount_degrades_to_zero() {
        assert_eq!(parse_amount("abc").cents(), 0);
        assert_eq!(parse_amount("").cents(), 0);
    }

    #[test]
    fn test_missing_description_placeholder() {
        let txn = normalize_row(&row(&[("date", "2025-09-15"), ("amount", "1")]));
        assert_eq!(txn.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_category_left_unset_not_defaulted() {
        let uncategorized = normalize_row(&row(&[("date", "2025-09-15"), ("amount", "-5")]));
        assert!(uncategorized.category.is_none());

        let categorized = normalize_row(&row(&[
            ("date", "2025-09-15"),
            ("amount", "-5"),
            ("categoria", "Food"),
        ]));
        assert_eq!(categorized.category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_raw_row_retained_with_unrecognized_columns() {
        let input = row(&[
            ("date", "2025-09-15"),
            ("amount", "-5"),
            ("saldo", "999,99"),
        ]);
        let txn = normalize_row(&input);
        let raw = txn.raw.as_ref().unwrap();
        assert_eq!(raw.get("saldo").map(String::as_str), Some("999,99"));
        assert_eq!(raw, &input);
    }
}
