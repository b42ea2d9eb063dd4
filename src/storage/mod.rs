//! Storage layer for bolso
//!
//! JSON file storage with atomic writes behind three fixed logical keys.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::Store;
