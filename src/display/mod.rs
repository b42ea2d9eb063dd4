//! Terminal table rendering
//!
//! Formats transactions, the daily series, and the budget report as text
//! tables for the CLI.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::services::{BudgetRow, DailyFlow};

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Account")]
    account: String,
}

/// Render a transaction listing
///
/// The category column shows the record's own string untouched; an
/// uncategorized transaction shows a dash.
pub fn transactions_table(transactions: &[Transaction]) -> String {
    let lines: Vec<TransactionLine> = transactions
        .iter()
        .map(|t| TransactionLine {
            id: t.id.to_string(),
            date: t.date.to_string(),
            amount: t.amount.to_string(),
            description: t.description.clone(),
            category: t.category.clone().unwrap_or_else(|| "-".to_string()),
            account: t.account.clone().unwrap_or_default(),
        })
        .collect();

    Table::new(lines).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct BudgetLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Variance")]
    variance: String,
    #[tabled(rename = "Fulfillment")]
    fulfillment: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render the budget report table
pub fn budget_table(rows: &[BudgetRow]) -> String {
    let lines: Vec<BudgetLine> = rows
        .iter()
        .map(|r| BudgetLine {
            category: r.category.to_string(),
            allocated: format_percentage(r.allocated * 100.0),
            budgeted: r.budgeted.to_string(),
            spent: r.spent.to_string(),
            variance: r.variance.to_string(),
            fulfillment: format_percentage(r.fulfillment * 100.0),
            status: r.status.to_string(),
        })
        .collect();

    Table::new(lines).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct DailyLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
}

/// Render the daily income/expense series
pub fn daily_table(daily: &[DailyFlow]) -> String {
    let lines: Vec<DailyLine> = daily
        .iter()
        .map(|d| DailyLine {
            date: d.date.to_string(),
            income: d.income.to_string(),
            expense: d.expense.to_string(),
        })
        .collect();

    Table::new(lines).with(Style::sharp()).to_string()
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_transactions_table_contains_fields() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            Money::from_cents(-72_311),
            "Mercado Azul",
        )
        .with_category("Food");

        let table = transactions_table(&[txn]);
        assert!(table.contains("Mercado Azul"));
        assert!(table.contains("-723.11"));
        assert!(table.contains("Food"));
    }

    #[test]
    fn test_uncategorized_shows_dash() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            Money::from_cents(-100),
            "coffee",
        );
        let table = transactions_table(&[txn]);
        assert!(table.contains('-'));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.0), "5.0%");
        assert_eq!(format_percentage(42.0), "42%");
        assert_eq!(format_percentage(120.0), "120%");
    }
}
