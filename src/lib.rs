//! bolso - terminal personal finance tracker
//!
//! This library provides the core functionality for bolso: transaction
//! normalization, rule-based categorization, monthly aggregation, and
//! budget evaluation. The CLI in `main.rs` is a thin shell over it.
//!
//! # Architecture
//!
//! - `config`: path management
//! - `error`: custom error types
//! - `models`: core data models (transactions, rules, budget, categories)
//! - `services`: the classification and aggregation engines, CSV import
//! - `storage`: JSON file storage behind three fixed logical keys
//! - `export`: fixed-column CSV export
//! - `backup`: backup archive create/restore
//! - `cli`: command handlers
//! - `display`: terminal table rendering

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BolsoError, BolsoResult};
