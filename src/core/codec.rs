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

//! src/core/codec.rs
//!
//! JSON codec for the keybinding table
//!
//! Two document shapes are understood:
//!
//! ```text
//! current: { "MoveFocusLeft": { "IsDirectMode": false, "Keys": ["Left"] },
//!            "ShowDesktop": null }
//! legacy:  { "MoveFocusLeft": ["Left"] }
//! ```
//!
//! Only the current shape is ever written.
//!
//! # Architecture
//! Decoding is a two-phase pipeline:
//! 1. Try the current schema. A document whose shape disagrees
//!    (not an object, or any value that is neither `null` nor a binding
//!    object) fails the whole phase with a `SchemaMismatch`.
//! 2. Only on that structural failure, try the legacy schema.
//!
//! If both phases mismatch, both causes are returned together.
//!
//! Inside whichever phase matched, each entry is resolved on its own.
//! An unknown action or key name (typically written by a newer release)
//! skips that entry only, and its slot keeps the seeded value.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::catalog::{Action, PhysicalKey};
use crate::core::table::KeybindingTable;
use crate::core::types::Keybinding;

/// Document shapes the decoder understands
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Schema {
    /// `{ name: null | { "Keys": [...], "IsDirectMode": bool } }`
    Current,
    /// `{ name: [...] }`, read-only
    Legacy,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Current => write!(f, "current"),
            Schema::Legacy => write!(f, "legacy"),
        }
    }
}

/// The document's overall shape does not match a schema.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("not a {schema} keybinding document: {reason}")]
pub struct SchemaMismatch {
    pub schema: Schema,
    pub reason: String,
}

/// Why a single entry was skipped
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EntryError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("entry has no key list")]
    MissingKeys,

    #[error("key list contains null")]
    NullKey,
}

/// An entry the decoder ignored, kept for diagnostics
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedEntry {
    /// Entry name as written in the document
    pub name: String,
    pub reason: EntryError,
}

/// Decode failures surfaced to the caller
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not JSON at all
    #[error("invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Neither schema matches the document's shape
    #[error("keybindings match no known schema ({current}; {legacy})")]
    BothSchemasFailed {
        current: SchemaMismatch,
        legacy: SchemaMismatch,
    },
}

/// Result of a successful decode, with diagnostics
#[derive(Clone, Debug)]
pub struct DecodeReport {
    pub table: KeybindingTable,

    /// Schema the document matched
    pub schema: Schema,

    /// Entries ignored because of unknown names, in document order
    pub skipped: Vec<SkippedEntry>,
}

impl DecodeReport {
    fn new(schema: Schema, use_defaults: bool) -> Self {
        Self {
            table: KeybindingTable::new(use_defaults),
            schema,
            skipped: Vec::new(),
        }
    }

    /// Applies one resolved entry, or records why it was skipped.
    fn apply(&mut self, name: &str, entry: Result<(Action, Option<Keybinding>), EntryError>) {
        match entry {
            Ok((action, binding)) => self.table.set(action, binding),
            Err(reason) => {
                warn!(entry = name, schema = %self.schema, %reason, "skipping keybinding entry");
                self.skipped.push(SkippedEntry {
                    name: name.to_string(),
                    reason,
                });
            }
        }
    }
}

/// Value shape of a current-schema entry
#[derive(Debug, Deserialize)]
struct CurrentEntry {
    #[serde(rename = "Keys", default)]
    keys: Option<Vec<Option<String>>>,

    #[serde(rename = "IsDirectMode", default)]
    is_direct_mode: bool,
}

/// Encodes `table` as a current-schema document.
///
/// Entries appear in canonical `Action` order and key lists in
/// `PhysicalKey` order, so equal tables always encode identically.
pub fn encode(table: &KeybindingTable) -> Value {
    let document: Map<String, Value> = table
        .iter()
        .map(|(action, binding)| {
            let value = match binding {
                None => Value::Null,
                Some(binding) => {
                    let keys: Vec<&str> = binding.keys.iter().map(|key| key.name()).collect();
                    json!({
                        "IsDirectMode": binding.direct_mode,
                        "Keys": keys,
                    })
                }
            };
            (action.name().to_string(), value)
        })
        .collect();

    Value::Object(document)
}

/// Encodes `table` as pretty-printed JSON text.
pub fn encode_to_string(table: &KeybindingTable) -> String {
    format!("{:#}", encode(table))
}

/// Decodes a document written in either schema.
///
/// # Arguments
/// * `document` - Parsed JSON document
/// * `use_defaults` - Seed slots from the built-in defaults (otherwise
///   every slot starts unbound)
///
/// # Example
/// ```
/// use serde_json::json;
/// use wm_keybindings::core::{codec, Action, PhysicalKey};
///
/// let table = codec::decode(&json!({ "MoveFocusLeft": ["A"] }), true)?;
/// let binding = table.get(Action::MoveFocusLeft).unwrap();
/// assert!(binding.keys.contains(&PhysicalKey::A));
/// assert!(!binding.direct_mode);
/// # Ok::<(), wm_keybindings::core::codec::DecodeError>(())
/// ```
pub fn decode(document: &Value, use_defaults: bool) -> Result<KeybindingTable, DecodeError> {
    decode_report(document, use_defaults).map(|report| report.table)
}

/// Parses JSON text, then decodes it like `decode`.
pub fn decode_str(text: &str, use_defaults: bool) -> Result<KeybindingTable, DecodeError> {
    let document: Value = serde_json::from_str(text)?;
    decode(&document, use_defaults)
}

/// Decodes like `decode`, also reporting the matched schema and every
/// skipped entry.
pub fn decode_report(document: &Value, use_defaults: bool) -> Result<DecodeReport, DecodeError> {
    let current = match decode_current(document, use_defaults) {
        Ok(report) => return Ok(report),
        Err(mismatch) => mismatch,
    };

    debug!(%current, "falling back to legacy keybinding schema");

    decode_legacy(document, use_defaults)
        .map_err(|legacy| DecodeError::BothSchemasFailed { current, legacy })
}

/// Phase 1: `{ name: null | { "Keys": [...], "IsDirectMode": bool } }`
fn decode_current(document: &Value, use_defaults: bool) -> Result<DecodeReport, SchemaMismatch> {
    let object = as_object(document, Schema::Current)?;

    // Shape-check every value before touching the table
    let entries = object
        .iter()
        .map(|(name, value)| current_entry(name, value).map(|entry| (name.as_str(), entry)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = DecodeReport::new(Schema::Current, use_defaults);
    for (name, entry) in entries {
        let resolved = resolve_action(name).and_then(|action| match entry {
            None => Ok((action, None)),
            Some(entry) => {
                let names = entry.keys.as_deref().ok_or(EntryError::MissingKeys)?;
                let keys = resolve_keys(names)?;
                Ok((action, Some(Keybinding { keys, direct_mode: entry.is_direct_mode })))
            }
        });
        report.apply(name, resolved);
    }

    Ok(report)
}

/// Phase 2: `{ name: [...] }`, direct mode always off
fn decode_legacy(document: &Value, use_defaults: bool) -> Result<DecodeReport, SchemaMismatch> {
    let object = as_object(document, Schema::Legacy)?;

    let entries = object
        .iter()
        .map(|(name, value)| {
            Option::<Vec<Option<String>>>::deserialize(value)
                .map(|keys| (name.as_str(), keys))
                .map_err(|e| entry_mismatch(Schema::Legacy, name, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = DecodeReport::new(Schema::Legacy, use_defaults);
    for (name, names) in entries {
        let resolved = resolve_action(name).and_then(|action| {
            let names = names.as_deref().ok_or(EntryError::MissingKeys)?;
            let keys = resolve_keys(names)?;
            Ok((action, Some(Keybinding { keys, direct_mode: false })))
        });
        report.apply(name, resolved);
    }

    Ok(report)
}

/// `null` or a binding object. Serde would also accept a struct written
/// as an array, which must stay a mismatch here so legacy documents fall
/// through to phase 2.
fn current_entry(name: &str, value: &Value) -> Result<Option<CurrentEntry>, SchemaMismatch> {
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => CurrentEntry::deserialize(value)
            .map(Some)
            .map_err(|e| entry_mismatch(Schema::Current, name, e)),
        other => Err(SchemaMismatch {
            schema: Schema::Current,
            reason: format!(
                "entry '{}': expected null or an object, found {}",
                name,
                kind_of(other)
            ),
        }),
    }
}

fn as_object(document: &Value, schema: Schema) -> Result<&Map<String, Value>, SchemaMismatch> {
    document.as_object().ok_or_else(|| SchemaMismatch {
        schema,
        reason: format!("expected an object at the top level, found {}", kind_of(document)),
    })
}

fn entry_mismatch(schema: Schema, name: &str, error: serde_json::Error) -> SchemaMismatch {
    SchemaMismatch {
        schema,
        reason: format!("entry '{}': {}", name, error),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn resolve_action(name: &str) -> Result<Action, EntryError> {
    Action::from_name(name).ok_or_else(|| EntryError::UnknownAction(name.to_string()))
}

/// Null names skip the entry like unknown ones.
fn resolve_keys(names: &[Option<String>]) -> Result<BTreeSet<PhysicalKey>, EntryError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_deref().ok_or(EntryError::NullKey)?;
            PhysicalKey::from_name(name).ok_or_else(|| EntryError::UnknownKey(name.to_string()))
        })
        .collect()
}
