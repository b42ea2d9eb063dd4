//! Export functionality

pub mod csv;

pub use csv::export_transactions_csv;
