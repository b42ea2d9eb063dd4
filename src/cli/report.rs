//! Monthly report CLI command
//!
//! Renders the aggregated month: totals, daily series, and the budget table.

use crate::display::{budget_table, daily_table, transactions_table};
use crate::error::BolsoResult;
use crate::models::Month;
use crate::services::{evaluate, MonthlySummary};
use crate::storage::Store;

/// Print the report for one month (defaults to the current month)
pub fn handle_report(store: &Store, month: Option<Month>) -> BolsoResult<()> {
    let month = month.unwrap_or_else(Month::current);
    let summary = MonthlySummary::compute(&store.transactions, month);

    println!("Report for {}", month);
    println!();
    println!("Income:  {}", summary.income);
    println!("Expense: {}", summary.expense);
    println!("Result:  {}", summary.result);
    println!();

    if summary.transactions.is_empty() {
        println!("No transactions in {}.", month);
        return Ok(());
    }

    println!("Transactions");
    println!("{}", transactions_table(&summary.transactions));
    println!();

    println!("Daily flow");
    println!("{}", daily_table(&summary.daily));
    println!();

    let rows = evaluate(&store.budget, summary.income, &summary.spend_by_category);
    println!("Budget");
    println!("{}", budget_table(&rows));

    Ok(())
}
