//! Monthly aggregation
//!
//! Pure roll-up of a transaction set for one calendar month: the filtered
//! subset, income/expense/result totals, per-category spend, and a daily
//! time series. Everything is recomputed on demand from `(transactions,
//! month)`; there is no hidden state.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Money, Month, Transaction};

/// Income and expense totals for a single day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

/// The monthly roll-up consumed by the report and the budget evaluator
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// The target month
    pub month: Month,
    /// Transactions whose date falls in the month, input order preserved
    pub transactions: Vec<Transaction>,
    /// Sum of positive amounts
    pub income: Money,
    /// Sum of absolute values of negative amounts
    pub expense: Money,
    /// `income - expense`
    pub result: Money,
    /// Absolute spend per category string; uncategorized spend is bucketed
    /// under the catch-all name. Raw category strings are preserved here;
    /// mapping onto the fixed vocabulary happens in the budget evaluator.
    pub spend_by_category: BTreeMap<String, Money>,
    /// Per-date income and expense, ascending by date
    pub daily: Vec<DailyFlow>,
}

impl MonthlySummary {
    /// Compute the summary for one month of a transaction set
    pub fn compute(transactions: &[Transaction], month: Month) -> Self {
        let month_txns: Vec<Transaction> = transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .cloned()
            .collect();

        let mut income = Money::zero();
        let mut expense = Money::zero();
        let mut spend_by_category: BTreeMap<String, Money> = BTreeMap::new();
        let mut by_date: BTreeMap<NaiveDate, (Money, Money)> = BTreeMap::new();

        for txn in &month_txns {
            let flow = by_date.entry(txn.date).or_insert((Money::zero(), Money::zero()));

            if txn.amount.is_positive() {
                income += txn.amount;
                flow.0 += txn.amount;
            } else if txn.amount.is_negative() {
                let spent = txn.amount.abs();
                expense += spent;
                flow.1 += spent;

                let bucket = txn
                    .category
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or(Category::Other.name());
                *spend_by_category
                    .entry(bucket.to_string())
                    .or_insert_with(Money::zero) += spent;
            }
        }

        let daily = by_date
            .into_iter()
            .map(|(date, (income, expense))| DailyFlow {
                date,
                income,
                expense,
            })
            .collect();

        Self {
            month,
            result: income - expense,
            transactions: month_txns,
            income,
            expense,
            spend_by_category,
            daily,
        }
    }
}
