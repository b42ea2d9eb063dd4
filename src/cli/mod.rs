//! CLI command handlers
//!
//! One module per subcommand group; the binary in `main.rs` dispatches here.

pub mod backup;
pub mod budget;
pub mod import;
pub mod report;
pub mod rule;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use import::{handle_export, handle_import};
pub use report::handle_report;
pub use rule::{handle_rule_command, RuleCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
