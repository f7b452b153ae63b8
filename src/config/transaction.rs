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

//! Keybinding file transactions with automatic backups
//!
//! Provides atomic write operations for the keybinding document.

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::{ConfigError, KeybindingStore};

/// Atomic keybinding file transaction with automatic backup.
///
/// # Lifecycle
///
/// 1. `begin()` - Creates timestamped backup immediately
/// 2. Caller encodes the new document (in memory)
/// 3. `commit()` - Writes atomically, or `rollback()` - Restores original
///
/// # Example
///
/// ```no_run
/// use wm_keybindings::config::{KeybindingStore, KeybindingTransaction};
/// use wm_keybindings::core::{encode_to_string, KeybindingTable};
/// use std::path::PathBuf;
///
/// let store = KeybindingStore::new(PathBuf::from("keybindings.json"))?;
/// let tx = KeybindingTransaction::begin(&store)?;
///
/// tx.commit(&encode_to_string(&KeybindingTable::default()))?;
/// # Ok::<(), wm_keybindings::config::ConfigError>(())
/// ```
pub struct KeybindingTransaction<'a> {
    store: &'a KeybindingStore,
    backup_path: PathBuf,
}

impl<'a> KeybindingTransaction<'a> {
    /// Begins a transaction by backing up the current file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the backup cannot
    /// be written.
    pub fn begin(store: &'a KeybindingStore) -> Result<Self, ConfigError> {
        // Rollback point
        let backup_path = store.create_timestamped_backup()?;

        Ok(Self { store, backup_path })
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Atomically replaces the file with `new_content`.
    ///
    /// Consumes the transaction. On error the original file is
    /// untouched and the backup is still available.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        write_atomically(self.store.path(), new_content)
    }

    /// Restores the file from the backup taken in `begin()`.
    pub fn rollback(&self) -> Result<(), ConfigError> {
        let backup_content = fs::read_to_string(&self.backup_path)?;
        write_atomically(self.store.path(), &backup_content)
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let mut file = AtomicWriteFile::options().open(path).map_err(|e| {
        ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit().map_err(|e| {
        ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
    })?;

    Ok(())
}
