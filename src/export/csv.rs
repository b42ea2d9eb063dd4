//! CSV export
//!
//! Writes the transaction set with fixed columns and no header aliasing:
//! `date,amount,description,category,account,method`, one row per
//! transaction, input order preserved.

use std::io::Write;

use crate::error::{BolsoError, BolsoResult};
use crate::models::Transaction;

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> BolsoResult<()> {
    writeln!(writer, "date,amount,description,category,account,method")
        .map_err(|e| BolsoError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            txn.date,
            txn.amount,
            escape_csv(&txn.description),
            escape_csv(txn.category.as_deref().unwrap_or("")),
            escape_csv(txn.account.as_deref().unwrap_or("")),
            escape_csv(txn.method.as_deref().unwrap_or(""))
        )
        .map_err(|e| BolsoError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a field if it contains commas, quotes, or newlines
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(cents: i64, description: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            Money::from_cents(cents),
            description,
        )
    }

    #[test]
    fn test_export_fixed_columns() {
        let transactions = vec![
            txn(100_000, "Salary"),
            txn(-72_311, "Mercado Azul").with_category("Food"),
        ];

        let mut out = Vec::new();
        export_transactions_csv(&transactions, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,amount,description,category,account,method");
        assert_eq!(lines[1], "2025-09-15,1000.00,Salary,,,");
        assert_eq!(lines[2], "2025-09-15,-723.11,Mercado Azul,Food,,");
    }

    #[test]
    fn test_escaping() {
        let transactions = vec![txn(-500, "Store, the \"big\" one")];

        let mut out = Vec::new();
        export_transactions_csv(&transactions, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"Store, the \"\"big\"\" one\""));
    }

    #[test]
    fn test_empty_set_writes_header_only() {
        let mut out = Vec::new();
        export_transactions_csv(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
