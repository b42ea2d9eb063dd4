//! Rule CLI commands
//!
//! Rule management plus an explicit re-run of the classification engine
//! over the stored transaction set.

use clap::Subcommand;

use crate::error::{BolsoError, BolsoResult};
use crate::models::{Category, Rule};
use crate::services::apply_rules;
use crate::storage::Store;

/// Rule subcommands
#[derive(Subcommand)]
pub enum RuleCommands {
    /// Add a classification rule
    Add {
        /// Comma-separated keyword substrings (case-insensitive)
        keywords: String,
        /// Target category (must be in the fixed vocabulary)
        category: String,
        /// Priority; lower values are evaluated first
        #[arg(short, long, default_value_t = 0)]
        priority: i32,
        /// Create the rule disabled
        #[arg(long)]
        disabled: bool,
    },

    /// List rules in evaluation order
    List,

    /// Delete a rule by ID
    Delete {
        /// Rule ID as listed (short rul- form or full UUID)
        id: String,
    },

    /// Run the rule engine over all stored transactions
    Apply,
}

/// Handle a rule command
pub fn handle_rule_command(store: &mut Store, cmd: RuleCommands) -> BolsoResult<()> {
    match cmd {
        RuleCommands::Add {
            keywords,
            category,
            priority,
            disabled,
        } => {
            let category = Category::from_name(&category)
                .ok_or_else(|| BolsoError::category_not_found(category))?;

            let mut rule = Rule::new(keywords, category.name(), priority);
            rule.enabled = !disabled;
            if rule.tokens().is_empty() {
                return Err(BolsoError::Validation(
                    "Rule needs at least one non-empty keyword".into(),
                ));
            }

            println!("Added rule {}: {}", rule.id, rule);
            store.rules.push(rule);
            store.save_rules();
        }

        RuleCommands::List => {
            if store.rules.is_empty() {
                println!("No rules.");
                return Ok(());
            }
            let mut rules: Vec<&Rule> = store.rules.iter().collect();
            rules.sort_by_key(|r| r.priority);
            for rule in rules {
                println!("{}  {}", rule.id, rule);
            }
        }

        RuleCommands::Delete { id } => {
            let removed = store.remove_rule(&id)?;
            store.save_rules();
            println!("Deleted rule {}", removed);
        }

        RuleCommands::Apply => {
            let before = store
                .transactions
                .iter()
                .filter(|t| t.is_categorized())
                .count();

            store.transactions = apply_rules(&store.transactions, &store.rules);
            store.save_transactions();

            let after = store
                .transactions
                .iter()
                .filter(|t| t.is_categorized())
                .count();
            println!("Classified {} transaction(s).", after - before);
        }
    }

    Ok(())
}
