use crate::core::catalog::PhysicalKey;
use crate::core::types::Keybinding;

#[test]
fn test_keybinding_order_does_not_matter() {
    let binding1 = Keybinding::new([PhysicalKey::LWin, PhysicalKey::LeftShift, PhysicalKey::H], false);
    let binding2 = Keybinding::new([PhysicalKey::H, PhysicalKey::LWin, PhysicalKey::LeftShift], false);

    assert_eq!(binding1, binding2); // Should be equal after normalization
}

#[test]
fn test_keybinding_duplicates_collapse() {
    let binding = Keybinding::new([PhysicalKey::A, PhysicalKey::A, PhysicalKey::LWin], false);
    assert_eq!(binding.keys.len(), 2);
}

#[test]
fn test_keybinding_mode_matters() {
    let regular = Keybinding::new([PhysicalKey::F], false);
    let direct = Keybinding::new([PhysicalKey::F], true);

    assert_ne!(regular, direct);
}

#[test]
fn test_keybinding_display() {
    let binding = Keybinding::new([PhysicalKey::H, PhysicalKey::LWin], false);
    assert_eq!(format!("{}", binding), "LWin + H");

    let direct = Keybinding::new([PhysicalKey::Left, PhysicalKey::LeftCtrl, PhysicalKey::LWin], true);
    assert_eq!(format!("{}", direct), "LWin + LeftCtrl + Left (direct)");
}

#[test]
fn test_keybinding_display_empty() {
    let binding = Keybinding::new([], false);
    assert_eq!(format!("{}", binding), "(no keys)");
}
