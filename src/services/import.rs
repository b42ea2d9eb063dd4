//! CSV import
//!
//! Reads header-driven CSV files into canonical transactions. Column names
//! are case-insensitive aliases resolved by the normalizer; unrecognized
//! columns ride along on each record's audit field. A file that cannot be
//! read or parsed fails the whole batch with a single error; no partial
//! transaction set is ever produced. Malformed individual fields never fail
//! a row; they degrade to defaults inside the normalizer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{BolsoError, BolsoResult};
use crate::models::{Rule, Transaction};

use super::normalize::{normalize_row, RawRow};
use super::rules::apply_rules;

/// Parse CSV data into normalized transactions
pub fn read_csv<R: Read>(reader: R) -> BolsoResult<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| BolsoError::Import(format!("Unreadable CSV header: {}", e)))?
        .clone();

    let mut transactions = Vec::new();
    for record in csv_reader.records() {
        // A malformed record is a batch failure, not a skipped row
        let record =
            record.map_err(|e| BolsoError::Import(format!("Unreadable CSV record: {}", e)))?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        transactions.push(normalize_row(&row));
    }

    Ok(transactions)
}

/// Import a CSV file: normalize every row, then classify with the rule set
///
/// Returns the new transactions only; appending them to the stored set is
/// the caller's responsibility.
pub fn import_file(path: &Path, rules: &[Rule]) -> BolsoResult<Vec<Transaction>> {
    let file = File::open(path)
        .map_err(|e| BolsoError::Import(format!("Cannot open {}: {}", path.display(), e)))?;

    let transactions = read_csv(file)?;
    Ok(apply_rules(&transactions, rules))
}
