//! Business logic layer
//!
//! The core engines (normalization, rule classification, monthly
//! aggregation, budget evaluation) plus CSV import. Every function here is
//! synchronous and pure over its inputs: collections go in by reference, new
//! collections come out, and persisting the result stays with the caller.

pub mod aggregate;
pub mod budget;
pub mod import;
pub mod normalize;
pub mod rules;

pub use aggregate::{DailyFlow, MonthlySummary};
pub use budget::{evaluate, BudgetRow, BudgetStatus};
pub use import::{import_file, read_csv};
pub use normalize::{normalize_row, parse_amount, parse_date, RawRow};
pub use rules::apply_rules;
