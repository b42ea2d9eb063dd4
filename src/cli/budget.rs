//! Budget CLI commands
//!
//! Allocation management: show, set per category, restore defaults.

use clap::Subcommand;

use crate::display::format_percentage;
use crate::error::{BolsoError, BolsoResult};
use crate::models::{Budget, Category};
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show current allocations
    Show,

    /// Set the allocation fraction for a category
    Set {
        /// Category name (must be in the fixed vocabulary)
        category: String,
        /// Fraction of monthly income, between 0 and 1 (e.g. "0.15")
        fraction: f64,
    },

    /// Restore the default allocations
    Reset,
}

/// Handle a budget command
pub fn handle_budget_command(store: &mut Store, cmd: BudgetCommands) -> BolsoResult<()> {
    match cmd {
        BudgetCommands::Show => {
            for category in Category::ALL {
                println!(
                    "{:<26} {:>7}",
                    category.name(),
                    format_percentage(store.budget.allocation(category) * 100.0)
                );
            }
            println!(
                "{:<26} {:>7}",
                "Total",
                format_percentage(store.budget.total_allocated() * 100.0)
            );
        }

        BudgetCommands::Set { category, fraction } => {
            let category = Category::from_name(&category)
                .ok_or_else(|| BolsoError::category_not_found(category))?;

            store.budget.set(category, fraction)?;
            store.save_budget();
            println!(
                "Set {} to {}",
                category,
                format_percentage(fraction * 100.0)
            );
        }

        BudgetCommands::Reset => {
            store.budget = Budget::defaults();
            store.save_budget();
            println!("Restored default allocations.");
        }
    }

    Ok(())
}
