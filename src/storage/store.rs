//! The key-value store behind the three top-level collections
//!
//! Transactions, budget, and rules each live under one fixed logical key
//! (one JSON file in the data directory). Each key is read once at startup;
//! a missing key yields its default value. Writes happen on every state
//! change, and a failed write is logged and swallowed; the session
//! continues on the in-memory state, so correctness never depends on write
//! success.

use log::warn;

use crate::config::BolsoPaths;
use crate::error::{BolsoError, BolsoResult};
use crate::models::{Budget, Rule, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Owner of the three persisted collections
pub struct Store {
    paths: BolsoPaths,
    pub transactions: Vec<Transaction>,
    pub budget: Budget,
    pub rules: Vec<Rule>,
}

impl Store {
    /// Open the store, reading each logical key once
    ///
    /// Missing files yield defaults (empty transactions and rules, the
    /// seeded default budget). A present-but-corrupt file is an error.
    pub fn open(paths: BolsoPaths) -> BolsoResult<Self> {
        paths.ensure_directories()?;

        let transactions = read_json(paths.transactions_file())?;
        let budget = read_json(paths.budget_file())?;
        let rules = read_json(paths.rules_file())?;

        Ok(Self {
            paths,
            transactions,
            budget,
            rules,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BolsoPaths {
        &self.paths
    }

    /// Persist the transaction set; write failures are swallowed
    pub fn save_transactions(&self) {
        swallow(
            write_json_atomic(self.paths.transactions_file(), &self.transactions),
            "transactions",
        );
    }

    /// Persist the budget; write failures are swallowed
    pub fn save_budget(&self) {
        swallow(
            write_json_atomic(self.paths.budget_file(), &self.budget),
            "budget",
        );
    }

    /// Persist the rule set; write failures are swallowed
    pub fn save_rules(&self) {
        swallow(write_json_atomic(self.paths.rules_file(), &self.rules), "rules");
    }

    /// Persist all three collections
    pub fn save_all(&self) {
        self.save_transactions();
        self.save_budget();
        self.save_rules();
    }

    /// Find a transaction by ID selector (short listed form or full UUID)
    pub fn find_transaction(&self, selector: &str) -> BolsoResult<Option<&Transaction>> {
        let index = unique_index(self.transactions.iter().map(|t| t.id.matches(selector)), selector)?;
        Ok(index.map(|i| &self.transactions[i]))
    }

    /// Remove a transaction by ID selector (short listed form or full UUID)
    pub fn remove_transaction(&mut self, selector: &str) -> BolsoResult<Transaction> {
        let index =
            unique_index(self.transactions.iter().map(|t| t.id.matches(selector)), selector)?
                .ok_or_else(|| BolsoError::transaction_not_found(selector))?;
        Ok(self.transactions.remove(index))
    }

    /// Remove a rule by ID selector (short listed form or full UUID)
    pub fn remove_rule(&mut self, selector: &str) -> BolsoResult<Rule> {
        let index = unique_index(self.rules.iter().map(|r| r.id.matches(selector)), selector)?
            .ok_or_else(|| BolsoError::rule_not_found(selector))?;
        Ok(self.rules.remove(index))
    }
}

// A short selector could in principle prefix-match two IDs; that is an
// error rather than a silent pick.
fn unique_index(hits: impl Iterator<Item = bool>, selector: &str) -> BolsoResult<Option<usize>> {
    let mut found = None;
    for (index, hit) in hits.enumerate() {
        if hit {
            if found.is_some() {
                return Err(BolsoError::Validation(format!(
                    "Ambiguous ID {}; use the full UUID",
                    selector
                )));
            }
            found = Some(index);
        }
    }
    Ok(found)
}

fn swallow(result: BolsoResult<()>, key: &str) {
    if let Err(e) = result {
        warn!("Write of {} failed, continuing in memory: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> Store {
        Store::open(BolsoPaths::with_base_dir(dir.path().to_path_buf())).unwrap()
    }

    fn txn(cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            Money::from_cents(cents),
            "test",
        )
    }

    #[test]
    fn test_missing_keys_yield_defaults() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert!(store.transactions.is_empty());
        assert!(store.rules.is_empty());
        assert_eq!(store.budget, Budget::defaults());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = TempDir::new().unwrap();

        let mut store = open_store(&dir);
        store.transactions.push(txn(-500));
        store.rules.push(Rule::new("uber", "Transport", 0));
        store.budget.set(Category::Food, 0.42).unwrap();
        store.save_all();

        let reopened = open_store(&dir);
        assert_eq!(reopened.transactions, store.transactions);
        assert_eq!(reopened.rules, store.rules);
        assert_eq!(reopened.budget.allocation(Category::Food), 0.42);
    }

    #[test]
    fn test_remove_transaction_by_listed_form() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let t = txn(-500);
        let id = t.id;
        store.transactions.push(t);

        // The selector is exactly what the listing prints
        let removed = store.remove_transaction(&id.to_string()).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.transactions.is_empty());
        assert!(store
            .remove_transaction(&id.to_string())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_remove_transaction_by_full_uuid() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let t = txn(-500);
        let uuid = t.id.as_uuid().to_string();
        store.transactions.push(t);

        assert!(store.remove_transaction(&uuid).is_ok());
        assert!(store.transactions.is_empty());
    }

    #[test]
    fn test_find_transaction_by_selector() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let t = txn(-500);
        let id = t.id;
        store.transactions.push(t);

        let found = store.find_transaction(&id.to_string()).unwrap();
        assert_eq!(found.map(|t| t.id), Some(id));
        assert!(store.find_transaction("txn-00000000").unwrap().is_none());
    }

    #[test]
    fn test_ambiguous_selector_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        for uuid in [
            "aaaaaaaa-0000-4000-8000-000000000001",
            "aaaaaaaa-0000-4000-8000-000000000002",
        ] {
            let mut t = txn(-500);
            t.id = serde_json::from_str(&format!("\"{}\"", uuid)).unwrap();
            store.transactions.push(t);
        }

        let err = store.remove_transaction("txn-aaaaaaaa").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.transactions.len(), 2);
    }

    #[test]
    fn test_remove_rule_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(store
            .remove_rule(&crate::models::RuleId::new().to_string())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_corrupt_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = BolsoPaths::with_base_dir(dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.transactions_file(), "not json").unwrap();

        assert!(Store::open(paths).is_err());
    }
}
