//! Rule engine
//!
//! Classifies uncategorized transactions by keyword rules. Classification is
//! at-most-once: a transaction that already carries a category passes through
//! untouched, whether it was assigned manually or by a previous run. The
//! engine is therefore idempotent over its own output.

use crate::models::{Rule, Transaction};

/// Apply the rule set to a sequence of transactions
///
/// Returns a new sequence of the same length and order; each element is
/// either unchanged or has its `category` filled in by the first matching
/// enabled rule in ascending priority order (stable for equal priorities).
pub fn apply_rules(transactions: &[Transaction], rules: &[Rule]) -> Vec<Transaction> {
    let mut active: Vec<&Rule> = rules.iter().filter(|r| r.enabled).collect();
    active.sort_by_key(|r| r.priority);

    transactions
        .iter()
        .map(|txn| classify(txn, &active))
        .collect()
}

fn classify(txn: &Transaction, active: &[&Rule]) -> Transaction {
    if txn.is_categorized() {
        return txn.clone();
    }

    let haystack = format!(
        "{} {}",
        txn.description,
        txn.account.as_deref().unwrap_or("")
    )
    .to_lowercase();

    let mut out = txn.clone();
    if let Some(rule) = active.iter().find(|r| r.matches(&haystack)) {
        out.category = Some(rule.category.clone());
    }
    out
}
