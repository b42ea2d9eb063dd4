//! Transaction CLI commands
//!
//! Manual entry, listing, and deletion.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::transactions_table;
use crate::error::{BolsoError, BolsoResult};
use crate::models::{Category, Money, Month, Transaction};
use crate::storage::Store;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (positive for income, negative for expense, e.g. "-72.31")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Category name (must be in the fixed vocabulary)
        #[arg(short, long)]
        category: Option<String>,
        /// Account name
        #[arg(short, long)]
        account: Option<String>,
        /// Payment method
        #[arg(short, long)]
        method: Option<String>,
    },

    /// List transactions
    List {
        /// Restrict to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Delete a transaction by ID
    Delete {
        /// Transaction ID as listed (short txn- form or full UUID)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(store: &mut Store, cmd: TransactionCommands) -> BolsoResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            date,
            category,
            account,
            method,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| BolsoError::Validation(e.to_string()))?;

            let date = match date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                    BolsoError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s))
                })?,
                None => chrono::Local::now().date_naive(),
            };

            // Manual entry is scoped to the fixed vocabulary
            let category = category
                .map(|name| {
                    Category::from_name(&name)
                        .map(|c| c.name().to_string())
                        .ok_or_else(|| BolsoError::category_not_found(name))
                })
                .transpose()?;

            let mut txn = Transaction::new(date, amount, description);
            txn.category = category;
            txn.account = account;
            txn.method = method;

            println!("Added {}", txn);
            store.transactions.push(txn);
            store.save_transactions();
        }

        TransactionCommands::List { month } => {
            let listed: Vec<_> = match month {
                Some(month) => store
                    .transactions
                    .iter()
                    .filter(|t| month.contains(t.date))
                    .cloned()
                    .collect(),
                None => store.transactions.clone(),
            };

            if listed.is_empty() {
                println!("No transactions.");
            } else {
                println!("{}", transactions_table(&listed));
            }
        }

        TransactionCommands::Delete { id } => {
            let removed = store.remove_transaction(&id)?;
            store.save_transactions();
            println!("Deleted {}", removed);
        }
    }

    Ok(())
}
