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

//! src/core/defaults.rs
//!
//! Built-in default keybindings
//!
//! Regular bindings are pressed after the activation hotkey
//! (LWin + LeftShift), so most of them are a single key. Direct-mode
//! bindings are complete combinations that fire on their own.
//!
//! Actions without a sensible default return `None` (unbound).

use crate::core::catalog::{Action, PhysicalKey};
use crate::core::types::Keybinding;

use PhysicalKey::*;

/// Binding pressed after the activation hotkey
fn after_activation(keys: &[PhysicalKey]) -> Option<Keybinding> {
    Some(Keybinding::new(keys.iter().copied(), false))
}

/// Binding that fires directly
fn direct(keys: &[PhysicalKey]) -> Option<Keybinding> {
    Some(Keybinding::new(keys.iter().copied(), true))
}

/// Returns the built-in binding for `action`.
pub fn default_binding(action: Action) -> Option<Keybinding> {
    match action {
        Action::CreateHorizontalPanel => after_activation(&[H]),
        Action::CreateVerticalPanel => after_activation(&[V]),
        Action::CreateStackPanel => after_activation(&[S]),
        Action::PullWindowUp => after_activation(&[U]),

        Action::MoveFocusLeft => after_activation(&[Left]),
        Action::MoveFocusUp => after_activation(&[Up]),
        Action::MoveFocusRight => after_activation(&[Right]),
        Action::MoveFocusDown => after_activation(&[Down]),

        Action::MoveLeft => after_activation(&[LeftShift, Left]),
        Action::MoveUp => after_activation(&[LeftShift, Up]),
        Action::MoveRight => after_activation(&[LeftShift, Right]),
        Action::MoveDown => after_activation(&[LeftShift, Down]),
        Action::SwapLeft => after_activation(&[LeftCtrl, Left]),
        Action::SwapUp => after_activation(&[LeftCtrl, Up]),
        Action::SwapRight => after_activation(&[LeftCtrl, Right]),
        Action::SwapDown => after_activation(&[LeftCtrl, Down]),

        Action::IncreaseWidth => after_activation(&[OemPlus]),
        Action::DecreaseWidth => after_activation(&[OemMinus]),
        Action::IncreaseHeight => after_activation(&[LeftShift, OemPlus]),
        Action::DecreaseHeight => after_activation(&[LeftShift, OemMinus]),

        Action::ToggleFloatingMode => after_activation(&[F]),
        Action::ToggleManager => direct(&[LWin, LeftShift, LeftCtrl, F]),
        Action::RefreshWorkspace => after_activation(&[R]),
        Action::ShowDesktop => None,
        Action::Cancel => after_activation(&[Escape]),

        Action::SwitchToPreviousDesktop => direct(&[LWin, LeftCtrl, Left]),
        Action::SwitchToNextDesktop => direct(&[LWin, LeftCtrl, Right]),
        Action::SwitchToDesktop1 => after_activation(&[D1]),
        Action::SwitchToDesktop2 => after_activation(&[D2]),
        Action::SwitchToDesktop3 => after_activation(&[D3]),
        Action::SwitchToDesktop4 => after_activation(&[D4]),
        Action::SwitchToDesktop5 => after_activation(&[D5]),
        Action::SwitchToDesktop6 => after_activation(&[D6]),
        Action::SwitchToDesktop7 => after_activation(&[D7]),
        Action::SwitchToDesktop8 => after_activation(&[D8]),
        Action::SwitchToDesktop9 => after_activation(&[D9]),

        Action::MoveToPreviousDesktop => direct(&[LWin, LeftCtrl, LeftShift, Left]),
        Action::MoveToNextDesktop => direct(&[LWin, LeftCtrl, LeftShift, Right]),
        Action::MoveToDesktop1 => after_activation(&[LeftShift, D1]),
        Action::MoveToDesktop2 => after_activation(&[LeftShift, D2]),
        Action::MoveToDesktop3 => after_activation(&[LeftShift, D3]),
        Action::MoveToDesktop4 => after_activation(&[LeftShift, D4]),
        Action::MoveToDesktop5 => after_activation(&[LeftShift, D5]),
        Action::MoveToDesktop6 => after_activation(&[LeftShift, D6]),
        Action::MoveToDesktop7 => after_activation(&[LeftShift, D7]),
        Action::MoveToDesktop8 => after_activation(&[LeftShift, D8]),
        Action::MoveToDesktop9 => after_activation(&[LeftShift, D9]),
    }
}
