//! Backup CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::backup::BackupArchive;
use crate::error::BolsoResult;
use crate::storage::Store;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Write a full backup archive
    Create {
        /// Destination file
        file: PathBuf,
    },

    /// Restore collections from a backup archive
    Restore {
        /// Source file
        file: PathBuf,
    },
}

/// Handle a backup command
pub fn handle_backup_command(store: &mut Store, cmd: BackupCommands) -> BolsoResult<()> {
    match cmd {
        BackupCommands::Create { file } => {
            BackupArchive::snapshot(store).write_to_file(&file)?;
            println!("Backup written to {}.", file.display());
        }

        BackupCommands::Restore { file } => {
            // Parse fully before touching any collection
            let archive = BackupArchive::read_from_file(&file)?;
            let result = archive.restore_into(store);
            println!("{}", result.summary());
        }
    }

    Ok(())
}
