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

//! src/core/catalog.rs
//!
//! Closed catalogs of bindable actions and physical keys
//!
//! Both catalogs are ordered by declaration. That order is the canonical
//! order used when iterating a `KeybindingTable` and when writing key
//! lists, so the on-disk document is deterministic.
//!
//! # Name lookup
//! - `Action::from_name` ignores ASCII case (older writers were not
//!   consistent about casing)
//! - `PhysicalKey::from_name` is exact, matching the writer's spelling
//!
//! Both return `Option`, so an unknown name is an ordinary branch for
//! the decoder rather than an error.

use std::fmt;

/// Declares a closed, ordered catalog enum with its `ALL` table and
/// stable string names.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in canonical order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable name written to and read from documents.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

catalog! {
    /// A command the window manager can bind to a key combination
    pub enum Action {
        // Panel creation
        CreateHorizontalPanel,
        CreateVerticalPanel,
        CreateStackPanel,
        PullWindowUp,

        // Focus
        MoveFocusLeft,
        MoveFocusUp,
        MoveFocusRight,
        MoveFocusDown,

        // Window movement
        MoveLeft,
        MoveUp,
        MoveRight,
        MoveDown,
        SwapLeft,
        SwapUp,
        SwapRight,
        SwapDown,

        // Resizing
        IncreaseWidth,
        DecreaseWidth,
        IncreaseHeight,
        DecreaseHeight,

        // Window state
        ToggleFloatingMode,
        ToggleManager,
        RefreshWorkspace,
        ShowDesktop,
        Cancel,

        // Virtual desktops
        SwitchToPreviousDesktop,
        SwitchToNextDesktop,
        SwitchToDesktop1,
        SwitchToDesktop2,
        SwitchToDesktop3,
        SwitchToDesktop4,
        SwitchToDesktop5,
        SwitchToDesktop6,
        SwitchToDesktop7,
        SwitchToDesktop8,
        SwitchToDesktop9,
        MoveToPreviousDesktop,
        MoveToNextDesktop,
        MoveToDesktop1,
        MoveToDesktop2,
        MoveToDesktop3,
        MoveToDesktop4,
        MoveToDesktop5,
        MoveToDesktop6,
        MoveToDesktop7,
        MoveToDesktop8,
        MoveToDesktop9,
    }
}

catalog! {
    /// A physical keyboard key
    pub enum PhysicalKey {
        // Modifiers
        LWin,
        RWin,
        LeftCtrl,
        RightCtrl,
        LeftShift,
        RightShift,
        LeftAlt,
        RightAlt,

        // Editing and whitespace
        Tab,
        Space,
        Enter,
        Escape,
        Back,
        Delete,
        Insert,

        // Navigation
        Left,
        Up,
        Right,
        Down,
        Home,
        End,
        PageUp,
        PageDown,

        // Letters
        A, B, C, D, E, F, G, H, I, J, K, L, M,
        N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

        // Digit row
        D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,

        // Function keys
        F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

        // Punctuation
        OemPlus,
        OemMinus,
        OemComma,
        OemPeriod,
        OemOpenBrackets,
        OemCloseBrackets,
    }
}

impl Action {
    /// Resolves an action name, ignoring ASCII case.
    ///
    /// Returns `None` for names this build does not know, e.g. actions
    /// added by a newer release.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }
}

impl PhysicalKey {
    /// Resolves a key name exactly as written by the encoder.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}
