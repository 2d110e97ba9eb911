//! Path resolution for edudesk configuration and data files.
//!
//! All edudesk data is stored in `~/.edudesk/`:
//! - `config.yaml` - Main configuration file
//! - `edudesk.db` - SQLite database holding the chat and focus snapshots

use std::path::PathBuf;

use crate::error::EdudeskError;

/// Paths to edudesk configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.edudesk/`
    pub root: PathBuf,
    /// Config file: `~/.edudesk/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.edudesk/edudesk.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EdudeskError> {
        let home = std::env::var("HOME").map_err(|_| {
            EdudeskError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".edudesk")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("edudesk.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), EdudeskError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                EdudeskError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
