//! Budget evaluation
//!
//! Combines per-category allocations with aggregated monthly spend into one
//! row per vocabulary category: budgeted amount, actual spend, variance,
//! fulfillment ratio, and a four-way status classification.

use std::collections::BTreeMap;

use crate::models::{Budget, Category, Money};

/// Fulfillment below this fraction is on track
const ON_TRACK_THRESHOLD: f64 = 0.8;
/// Fulfillment above 1.0 is over budget
const OVER_THRESHOLD: f64 = 1.0;

/// Budget-variance status for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetStatus {
    /// Nothing budgeted and nothing spent
    Neutral,
    /// Fulfillment below 0.8
    OnTrack,
    /// Fulfillment between 0.8 and 1.0 inclusive
    Watch,
    /// Fulfillment above 1.0, or any spend against a zero budget
    Over,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BudgetStatus::Neutral => "neutral",
            BudgetStatus::OnTrack => "on track",
            BudgetStatus::Watch => "watch",
            BudgetStatus::Over => "over",
        };
        write!(f, "{}", label)
    }
}

/// One row of the budget table
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub category: Category,
    /// Allocated fraction of monthly income
    pub allocated: f64,
    /// `allocated * monthly income`
    pub budgeted: Money,
    /// Aggregated absolute spend for the category
    pub spent: Money,
    /// `budgeted - spent`; positive means under budget
    pub variance: Money,
    /// `spent / budgeted` when budgeted > 0, else 0
    pub fulfillment: f64,
    pub status: BudgetStatus,
}

/// Evaluate the budget against one month's aggregated spend
///
/// Produces one row per vocabulary category, in vocabulary order. Spend keys
/// outside the vocabulary are folded into the `Other` bucket first.
pub fn evaluate(
    budget: &Budget,
    monthly_income: Money,
    spend_by_category: &BTreeMap<String, Money>,
) -> Vec<BudgetRow> {
    // Fold raw category strings onto the fixed vocabulary
    let mut spent_by_vocab: BTreeMap<Category, Money> = BTreeMap::new();
    for (name, amount) in spend_by_category {
        *spent_by_vocab
            .entry(Category::from_name_or_other(name))
            .or_insert_with(Money::zero) += *amount;
    }

    Category::ALL
        .iter()
        .map(|&category| {
            let allocated = budget.allocation(category);
            let budgeted = monthly_income.scale(allocated);
            let spent = spent_by_vocab
                .get(&category)
                .copied()
                .unwrap_or_else(Money::zero);
            row(category, allocated, budgeted, spent)
        })
        .collect()
}

fn row(category: Category, allocated: f64, budgeted: Money, spent: Money) -> BudgetRow {
    let fulfillment = if budgeted.is_positive() {
        spent.to_f64() / budgeted.to_f64()
    } else {
        0.0
    };

    let status = if budgeted.is_zero() && spent.is_zero() {
        BudgetStatus::Neutral
    } else if budgeted.is_zero() {
        // Spend against a zero budget is over budget even though the
        // zero-division guard pins fulfillment at 0
        BudgetStatus::Over
    } else if fulfillment < ON_TRACK_THRESHOLD {
        BudgetStatus::OnTrack
    } else if fulfillment <= OVER_THRESHOLD {
        BudgetStatus::Watch
    } else {
        BudgetStatus::Over
    };

    BudgetRow {
        category,
        allocated,
        budgeted,
        spent,
        variance: budgeted - spent,
        fulfillment,
        status,
    }
}
