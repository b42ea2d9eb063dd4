//! Core data models for bolso
//!
//! This module contains the domain types: money, strongly-typed IDs, the
//! category vocabulary, transactions, classification rules, budget
//! allocations, and the calendar-month value type.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod rule;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use ids::{RuleId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use rule::Rule;
pub use transaction::{Transaction, NO_DESCRIPTION};
