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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the keybinding data model and its codec:
//! - Action and physical key catalogs
//! - The `Keybinding` value type and the built-in defaults
//! - `KeybindingTable`, a total map from action to binding
//! - JSON encode/decode with legacy-schema fallback
//!
//! Nothing here performs I/O, so it is tested without touching the
//! filesystem.

pub mod catalog;
pub mod codec;
pub mod defaults;
pub mod table;
pub mod types;

pub use catalog::{Action, PhysicalKey};
pub use codec::{decode, decode_report, decode_str, encode, encode_to_string, DecodeError};
pub use defaults::default_binding;
pub use table::KeybindingTable;
pub use types::Keybinding;

#[cfg(test)]
mod tests;
