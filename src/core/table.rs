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

//! src/core/table.rs
//!
//! The keybinding table: one slot per `Action`
//!
//! The table is total. Every action in the catalog has a slot from
//! construction onwards, holding either a binding or `None` (explicitly
//! unbound). Slots can be overwritten but never removed.
//!
//! # Performance
//! Backed by a `BTreeMap` keyed on `Action`, which keeps iteration in
//! catalog order. Lookups are O(log n) over a few dozen actions.

use std::collections::BTreeMap;

use crate::core::catalog::Action;
use crate::core::defaults::default_binding;
use crate::core::types::Keybinding;

/// Total mapping from every `Action` to an optional `Keybinding`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeybindingTable {
    /// Always contains every member of `Action::ALL`
    entries: BTreeMap<Action, Option<Keybinding>>,
}

impl KeybindingTable {
    /// Creates a table seeded with the built-in defaults, or with every
    /// action unbound when `use_defaults` is false.
    pub fn new(use_defaults: bool) -> Self {
        let entries = Action::ALL
            .iter()
            .map(|&action| {
                let binding = if use_defaults {
                    default_binding(action)
                } else {
                    None
                };
                (action, binding)
            })
            .collect();

        Self { entries }
    }

    /// Overwrites the slot for `action`.
    pub fn set(&mut self, action: Action, binding: Option<Keybinding>) {
        self.entries.insert(action, binding);
    }

    pub fn bind(&mut self, action: Action, binding: Keybinding) {
        self.set(action, Some(binding));
    }

    pub fn unbind(&mut self, action: Action) {
        self.set(action, None);
    }

    /// Returns the binding for `action`, or `None` when it is unbound.
    pub fn get(&self, action: Action) -> Option<&Keybinding> {
        self.entries.get(&action).and_then(Option::as_ref)
    }

    /// Iterates every slot in canonical `Action` order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Option<&Keybinding>)> + '_ {
        self.entries
            .iter()
            .map(|(&action, binding)| (action, binding.as_ref()))
    }

    /// Number of actions that currently have a binding.
    pub fn bound_count(&self) -> usize {
        self.entries.values().filter(|binding| binding.is_some()).count()
    }

    /// Finds the first action (in catalog order) bound to exactly
    /// `binding`.
    pub fn find_action(&self, binding: &Keybinding) -> Option<Action> {
        self.iter()
            .find(|(_, candidate)| *candidate == Some(binding))
            .map(|(action, _)| action)
    }
}

impl Default for KeybindingTable {
    fn default() -> Self {
        Self::new(true)
    }
}
