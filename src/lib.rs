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

//! Window Manager Keybindings
//!
//! A backward-compatible codec for a tiling window manager's keybinding
//! table, plus a small file store and CLI around it.
//!
//! # Features
//!
//! - **Total tables:** Every action always has a slot (bound or unbound)
//! - **Schema fallback:** Reads the current document shape and the legacy
//!   array-only shape
//! - **Forward tolerance:** Entries from newer releases (unknown actions
//!   or keys) are skipped, not fatal
//! - **Deterministic output:** Documents are written in catalog order
//! - **Atomic Operations:** Safe file writes with timestamped backups
//!
//! # Architecture
//!
//! - **`core`:** Catalogs, defaults, the table, and the JSON codec (no I/O)
//! - **`config`:** File operations (reading, atomic writes, backups)
//! - **`logging`:** `tracing` subscriber setup for the binary
//!
//! # Examples
//!
//! ## Decoding a document
//!
//! ```
//! use wm_keybindings::core::{decode_str, Action};
//!
//! let table = decode_str(r#"{ "Cancel": null, "FutureAction": null }"#, true)?;
//! assert!(table.get(Action::Cancel).is_none());
//! assert!(table.get(Action::MoveFocusLeft).is_some());
//! # Ok::<(), wm_keybindings::core::DecodeError>(())
//! ```
//!
//! ## Encoding a table
//!
//! ```
//! use wm_keybindings::core::{encode, KeybindingTable};
//!
//! let document = encode(&KeybindingTable::default());
//! assert!(document["MoveFocusLeft"]["Keys"].is_array());
//! ```

pub mod config;
pub mod core;
pub mod logging;

// Re-export commonly used types for convenience
pub use core::{Action, Keybinding, KeybindingTable, PhysicalKey};
