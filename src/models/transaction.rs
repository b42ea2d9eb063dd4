//! Transaction model
//!
//! A single dated, signed monetary record. Positive amounts are income,
//! negative amounts are expenses. Created by manual entry, CSV import, or
//! backup restore; the only field the rule engine ever touches is
//! `category`, and only while it is unset.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::TransactionId;
use super::money::Money;

/// Placeholder description for records imported without one
pub const NO_DESCRIPTION: &str = "(no description)";

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, immutable for the process lifetime
    pub id: TransactionId,

    /// Transaction date (calendar date, no time component)
    pub date: NaiveDate,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Account the transaction belongs to, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Payment method, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Category name; free string so raw import values survive verbatim.
    /// `None` means uncategorized and eligible for rule classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Original import row, retained for audit purposes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<BTreeMap<String, String>>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, amount: Money, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            amount,
            description: description.into(),
            account: None,
            method: None,
            category: None,
            raw: None,
        }
    }

    /// Set the category (builder style)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the account (builder style)
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Check whether the transaction carries a non-empty category
    pub fn is_categorized(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
