// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keybinding file management with atomic writes and backup support.
//!
//! The codec in `core` never touches the filesystem. This module is the
//! thin layer that does:
//!
//! - **Loading**: reads the file and decodes either schema
//! - **Atomic writes**: temp-file-then-rename, so a crash never leaves a
//!   half-written document
//! - **Automatic backups**: every save first copies the file to a
//!   timestamped backup
//!
//! # Example
//!
//! ```no_run
//! use wm_keybindings::config::KeybindingStore;
//!
//! let store = KeybindingStore::new("/home/user/.config/wm-keybindings/keybindings.json".into())?;
//!
//! let mut table = store.load(true)?.table;
//! table.unbind(wm_keybindings::core::Action::ShowDesktop);
//! store.save(&table)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod transaction;

pub use error::ConfigError;
pub use transaction::KeybindingTransaction;

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::codec::{self, DecodeReport, Schema};
use crate::core::KeybindingTable;

/// Default location of the keybinding file, before tilde expansion.
pub const DEFAULT_KEYBINDINGS_PATH: &str = "~/.config/wm-keybindings/keybindings.json";

/// Upper bound on backups sharing one timestamp.
const MAX_BACKUPS_PER_SECOND: u32 = 1000;

/// Reads and writes one keybinding file.
///
/// Writes go through `KeybindingTransaction` so that every change is
/// atomic and preceded by a backup.
#[derive(Debug)]
pub struct KeybindingStore {
    /// Path to the keybinding document.
    path: PathBuf,
    backup_dir: PathBuf,
}

impl KeybindingStore {
    /// Creates a store for an existing keybinding file.
    ///
    /// Creates a `backups/` directory next to the file if needed. A
    /// symlinked file is allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist.
    /// Returns `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        if path.read_link().is_ok() {
            warn!(path = %path.display(), "keybinding file is a symlink");
        }

        // e.g., ~/.config/wm-keybindings/keybindings.json → ~/.config/wm-keybindings/backups/
        let backup_dir = path
            .parent()
            .ok_or_else(|| {
                ConfigError::BackupDirNotWritable(PathBuf::from(
                    "Keybinding file has no parent directory",
                ))
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ConfigError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self { path, backup_dir })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Reads the raw file content.
    pub fn read(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Reads and decodes the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Decode` if the file is not JSON or matches
    /// neither schema. Unknown entries are not errors; they are listed
    /// in the report's `skipped`.
    pub fn load(&self, use_defaults: bool) -> Result<DecodeReport, ConfigError> {
        let content = self.read()?;
        let document = serde_json::from_str(&content).map_err(codec::DecodeError::from)?;
        Ok(codec::decode_report(&document, use_defaults)?)
    }

    /// Writes `table` in the current schema, backing up the old file.
    ///
    /// Returns the path of the backup.
    pub fn save(&self, table: &KeybindingTable) -> Result<PathBuf, ConfigError> {
        let tx = KeybindingTransaction::begin(self)?;
        let backup_path = tx.backup_path().to_path_buf();

        tx.commit(&codec::encode_to_string(table))?;

        info!(
            path = %self.path.display(),
            backup = %backup_path.display(),
            bound = table.bound_count(),
            "saved keybindings"
        );
        Ok(backup_path)
    }

    /// Rewrites a legacy file in the current schema.
    ///
    /// A file already in the current schema is left alone, so entries
    /// from a newer release survive. Returns the backup path when the
    /// file was rewritten, `None` otherwise.
    pub fn migrate(&self) -> Result<Option<PathBuf>, ConfigError> {
        let report = self.load(true)?;

        if report.schema == Schema::Current {
            info!(path = %self.path.display(), "keybindings already in current schema");
            return Ok(None);
        }

        self.save(&report.table).map(Some)
    }

    fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(&self.path)?;

        // YYYY-MM-DD_HHMMSS
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConfigError::BackupFailed(format!(
                    "File name is not valid UTF-8: {}",
                    self.path.display()
                ))
            })?;

        let base_name = format!("{}.{}", original_name, timestamp);

        // Several saves in the same second get "-1", "-2", ... suffixes
        for attempt in 0..MAX_BACKUPS_PER_SECOND {
            let backup_name = if attempt == 0 {
                base_name.clone()
            } else {
                format!("{}-{}", base_name, attempt)
            };
            let backup_path = self.backup_dir.join(backup_name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&backup_path)
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(ConfigError::BackupFailed(e.to_string())),
            };

            file.write_all(content.as_bytes())
                .map_err(|e| ConfigError::BackupFailed(e.to_string()))?;

            return Ok(backup_path);
        }

        Err(ConfigError::BackupFailed(format!(
            "Too many backups named {} in {}",
            base_name,
            self.backup_dir.display()
        )))
    }
}

#[cfg(test)]
mod tests;
