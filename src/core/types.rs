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

//! src/core/types.rs
//!
//! The `Keybinding` value type
//!
//! A keybinding is a set of physical keys plus the direct-mode flag.
//! Keys are held in a `BTreeSet`, so two bindings built from the same
//! keys in a different order are equal, and iteration always follows the
//! `PhysicalKey` catalog order.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::catalog::PhysicalKey;

/// Keys that trigger an action, plus how the dispatcher activates it
///
/// # Example
/// ```
/// use wm_keybindings::core::{Keybinding, PhysicalKey};
///
/// let a = Keybinding::new([PhysicalKey::H, PhysicalKey::LWin], false);
/// let b = Keybinding::new([PhysicalKey::LWin, PhysicalKey::H], false);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "LWin + H");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Keybinding {
    /// Physical keys in catalog order (duplicates collapse)
    pub keys: BTreeSet<PhysicalKey>,

    /// Direct mode: the action fires on the key combination itself
    /// rather than after the activation hotkey
    pub direct_mode: bool,
}

impl Keybinding {
    pub fn new(keys: impl IntoIterator<Item = PhysicalKey>, direct_mode: bool) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            direct_mode,
        }
    }
}

impl fmt::Display for Keybinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            write!(f, "(no keys)")?;
        } else {
            let keys = self
                .keys
                .iter()
                .map(|key| key.name())
                .collect::<Vec<_>>()
                .join(" + ");
            write!(f, "{}", keys)?;
        }

        if self.direct_mode {
            write!(f, " (direct)")?;
        }

        Ok(())
    }
}
