//! Backup archives
//!
//! A backup is a single JSON object holding the three top-level collections.
//! Restoring replaces each present collection wholesale and leaves absent
//! ones untouched. A malformed payload rejects the whole restore with one
//! error. The archive is parsed completely before anything is applied, so
//! no partial state ever lands.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BolsoError, BolsoResult};
use crate::models::{Budget, Rule, Transaction};
use crate::storage::Store;

/// Current backup schema version
pub const SCHEMA_VERSION: u32 = 1;

/// A full backup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// When the backup was created
    pub created_at: DateTime<Utc>,

    /// The transaction set, if backed up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,

    /// The budget allocations, if backed up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,

    /// The rule set, if backed up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
}

impl BackupArchive {
    /// Snapshot all three collections from the store
    pub fn snapshot(store: &Store) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            created_at: Utc::now(),
            transactions: Some(store.transactions.clone()),
            budget: Some(store.budget.clone()),
            rules: Some(store.rules.clone()),
        }
    }

    /// Write the archive to a file
    pub fn write_to_file(&self, path: &Path) -> BolsoResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BolsoError::Backup(format!("Failed to serialize backup: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| BolsoError::Backup(format!("Failed to write backup file: {}", e)))?;
        Ok(())
    }

    /// Read and parse an archive from a file
    ///
    /// Any shape problem fails here, before a restore can begin.
    pub fn read_from_file(path: &Path) -> BolsoResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BolsoError::Backup(format!("Failed to read backup file: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| BolsoError::Backup(format!("Invalid backup payload: {}", e)))
    }

    /// Apply the archive to the store
    ///
    /// Each present collection replaces its stored counterpart wholesale;
    /// absent collections are left untouched. Returns what was restored.
    pub fn restore_into(&self, store: &mut Store) -> RestoreResult {
        let mut result = RestoreResult {
            schema_version: self.schema_version,
            backup_date: self.created_at,
            ..RestoreResult::default()
        };

        if let Some(transactions) = &self.transactions {
            store.transactions = transactions.clone();
            result.transactions_restored = true;
        }
        if let Some(budget) = &self.budget {
            store.budget = budget.clone();
            result.budget_restored = true;
        }
        if let Some(rules) = &self.rules {
            store.rules = rules.clone();
            result.rules_restored = true;
        }

        store.save_all();
        result
    }
}

/// Result of a restore operation
#[derive(Debug, Default)]
pub struct RestoreResult {
    /// Schema version of the restored backup
    pub schema_version: u32,
    /// Date the backup was created
    pub backup_date: DateTime<Utc>,
    /// Whether transactions were restored
    pub transactions_restored: bool,
    /// Whether the budget was restored
    pub budget_restored: bool,
    /// Whether rules were restored
    pub rules_restored: bool,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.transactions_restored {
            parts.push("transactions");
        }
        if self.budget_restored {
            parts.push("budget");
        }
        if self.rules_restored {
            parts.push("rules");
        }
        if parts.is_empty() {
            "Restored: nothing (empty archive)".to_string()
        } else {
            format!("Restored: {}", parts.join(", "))
        }
    }
}
