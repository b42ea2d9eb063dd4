//! JSON file I/O
//!
//! Reads tolerate a missing file (fresh install) but not a corrupt one.
//! Writes go through a temp file plus rename so a crash mid-write never
//! leaves a half-written store behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BolsoError;

fn storage_err(context: &str, path: &Path, err: impl std::fmt::Display) -> BolsoError {
    BolsoError::Storage(format!("{} {}: {}", context, path.display(), err))
}

/// Read a JSON value from `path`. A missing file yields `T::default()`;
/// anything else that goes wrong is an error.
pub fn read_json<T, P>(path: P) -> Result<T, BolsoError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_err("Cannot open", path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| storage_err("Cannot parse", path, e))
}

/// Write `data` as pretty JSON, atomically.
///
/// The value lands in `<path>.tmp` first, gets fsynced, and is then
/// renamed over the target. The temp file lives in the same directory
/// as the target so the rename stays on one filesystem.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BolsoError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("Cannot create", parent, e))?;
    }

    let tmp = path.with_extension("json.tmp");
    let mut writer = BufWriter::new(
        File::create(&tmp).map_err(|e| storage_err("Cannot create", &tmp, e))?,
    );

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("Cannot serialize to", &tmp, e))?;
    writer.flush().map_err(|e| storage_err("Cannot flush", &tmp, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("Cannot sync", &tmp, e))?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        storage_err("Cannot rename into", path, e)
    })
}
