//! Data directory resolution
//!
//! The store lives in one base directory, resolved in this order:
//!
//! 1. `BOLSO_DATA_DIR`, when set
//! 2. `$XDG_CONFIG_HOME/bolso`, falling back to `~/.config/bolso` (unix)
//! 3. `%APPDATA%\bolso` (windows)

use std::path::PathBuf;

use crate::error::BolsoError;

/// Locations of the store's files
#[derive(Debug, Clone)]
pub struct BolsoPaths {
    base_dir: PathBuf,
}

impl BolsoPaths {
    /// Resolve the base directory from the environment.
    ///
    /// # Errors
    ///
    /// Fails when no home directory can be determined.
    pub fn new() -> Result<Self, BolsoError> {
        let base_dir = match std::env::var("BOLSO_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => platform_base_dir()?,
        };
        Ok(Self { base_dir })
    }

    /// Point at an explicit base directory, bypassing resolution.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// The transactions logical key
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// The budget logical key
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// The rules logical key
    pub fn rules_file(&self) -> PathBuf {
        self.data_dir().join("rules.json")
    }

    /// Create the base and data directories if needed.
    pub fn ensure_directories(&self) -> Result<(), BolsoError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                BolsoError::Io(format!("Cannot create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(not(windows))]
fn platform_base_dir() -> Result<PathBuf, BolsoError> {
    let config_home = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .map_err(|_| BolsoError::Config("HOME is not set".into()))?,
    };
    Ok(config_home.join("bolso"))
}

#[cfg(windows)]
fn platform_base_dir() -> Result<PathBuf, BolsoError> {
    std::env::var("APPDATA")
        .map(|appdata| PathBuf::from(appdata).join("bolso"))
        .map_err(|_| BolsoError::Config("APPDATA is not set".into()))
}
