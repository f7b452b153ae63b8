use crate::core::catalog::{Action, PhysicalKey};

#[test]
fn test_action_lookup_ignores_case() {
    assert_eq!(Action::from_name("MoveFocusLeft"), Some(Action::MoveFocusLeft));
    assert_eq!(Action::from_name("movefocusleft"), Some(Action::MoveFocusLeft));
    assert_eq!(Action::from_name("MOVEFOCUSLEFT"), Some(Action::MoveFocusLeft));
}

#[test]
fn test_action_lookup_unknown() {
    assert_eq!(Action::from_name("TeleportWindow"), None);
    assert_eq!(Action::from_name(""), None);
}

#[test]
fn test_key_lookup_is_exact() {
    assert_eq!(PhysicalKey::from_name("LWin"), Some(PhysicalKey::LWin));
    assert_eq!(PhysicalKey::from_name("D1"), Some(PhysicalKey::D1));
    assert_eq!(PhysicalKey::from_name("lwin"), None);
    assert_eq!(PhysicalKey::from_name("Hyper"), None);
}

#[test]
fn test_names_round_trip() {
    for &action in Action::ALL {
        assert_eq!(Action::from_name(action.name()), Some(action));
    }
    for &key in PhysicalKey::ALL {
        assert_eq!(PhysicalKey::from_name(key.name()), Some(key));
    }
}

#[test]
fn test_all_is_in_canonical_order() {
    // ALL must agree with Ord, which drives table iteration
    assert!(Action::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(PhysicalKey::ALL.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_display_uses_name() {
    assert_eq!(format!("{}", Action::ToggleFloatingMode), "ToggleFloatingMode");
    assert_eq!(format!("{}", PhysicalKey::OemPlus), "OemPlus");
}
