//! Import and export CLI commands

use std::fs::File;
use std::path::Path;

use crate::error::{BolsoError, BolsoResult};
use crate::export::export_transactions_csv;
use crate::services::import_file;
use crate::storage::Store;

/// Import transactions from a CSV file
///
/// Rows are normalized, classified with the current rule set, and appended
/// to the stored transaction set. A file that cannot be parsed commits
/// nothing.
pub fn handle_import(store: &mut Store, path: &Path) -> BolsoResult<()> {
    let imported = import_file(path, &store.rules)?;
    let count = imported.len();

    store.transactions.extend(imported);
    store.save_transactions();

    println!("Imported {} transaction(s) from {}.", count, path.display());
    Ok(())
}

/// Export all transactions to a fixed-column CSV file
pub fn handle_export(store: &Store, path: &Path) -> BolsoResult<()> {
    let mut file = File::create(path)
        .map_err(|e| BolsoError::Export(format!("Cannot create {}: {}", path.display(), e)))?;

    export_transactions_csv(&store.transactions, &mut file)?;
    println!(
        "Exported {} transaction(s) to {}.",
        store.transactions.len(),
        path.display()
    );
    Ok(())
}
