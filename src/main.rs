use anyhow::Result;
use clap::{Parser, Subcommand};

use bolso::cli::{
    handle_backup_command, handle_budget_command, handle_export, handle_import, handle_report,
    handle_rule_command, handle_transaction_command, BackupCommands, BudgetCommands, RuleCommands,
    TransactionCommands,
};
use bolso::config::BolsoPaths;
use bolso::models::Month;
use bolso::storage::Store;

#[derive(Parser)]
#[command(
    name = "bolso",
    version,
    about = "Terminal personal finance tracker",
    long_about = "bolso tracks personal finances from the command line: import \
                  bank CSVs, classify transactions with keyword rules, and \
                  compare monthly spending against budget allocations."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Import transactions from a CSV file
    Import {
        /// Path to the CSV file
        file: std::path::PathBuf,
    },

    /// Export transactions to a CSV file
    Export {
        /// Destination path
        file: std::path::PathBuf,
    },

    /// Classification rule commands
    #[command(subcommand)]
    Rule(RuleCommands),

    /// Budget allocation commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Monthly report
    Report {
        /// Month to report on (YYYY-MM, defaults to the current month)
        month: Option<Month>,
    },

    /// Backup commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = BolsoPaths::new()?;
    let mut store = Store::open(paths)?;

    match cli.command {
        Some(Commands::Tx(cmd)) => handle_transaction_command(&mut store, cmd)?,
        Some(Commands::Import { file }) => handle_import(&mut store, &file)?,
        Some(Commands::Export { file }) => handle_export(&store, &file)?,
        Some(Commands::Rule(cmd)) => handle_rule_command(&mut store, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut store, cmd)?,
        Some(Commands::Report { month }) => handle_report(&store, month)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&mut store, cmd)?,
        Some(Commands::Config) => {
            println!("bolso configuration");
            println!("===================");
            println!("Base directory: {}", store.paths().base_dir().display());
            println!("Data directory: {}", store.paths().data_dir().display());
            println!();
            println!(
                "Transactions: {} | Rules: {}",
                store.transactions.len(),
                store.rules.len()
            );
        }
        None => {
            println!("bolso - terminal personal finance tracker");
            println!();
            println!("Run 'bolso --help' for usage information.");
        }
    }

    Ok(())
}
