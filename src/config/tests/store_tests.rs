use super::super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::core::codec::{DecodeError, Schema};
use crate::core::{default_binding, Action, Keybinding, PhysicalKey};

/// Helper: Creates a temporary keybinding file with the given content.
fn create_test_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keybindings.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_new_with_valid_file() {
    let (_temp_dir, path) = create_test_file("{}");

    let store = KeybindingStore::new(path.clone());
    assert!(store.is_ok(), "Should create store with existing file");

    let store = store.unwrap();
    assert_eq!(store.path(), path.as_path());

    // Backup directory should be created
    let backup_dir = path.parent().unwrap().join("backups");
    assert!(backup_dir.is_dir(), "Backup directory should be created");
    assert_eq!(store.backup_dir(), backup_dir.as_path());
}

#[test]
fn test_new_with_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.json");

    match KeybindingStore::new(path.clone()).unwrap_err() {
        ConfigError::NotFound(missing) => assert_eq!(missing, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_load_current_document() {
    let (_temp_dir, path) =
        create_test_file(r#"{ "Cancel": { "Keys": ["Q"], "IsDirectMode": false } }"#);
    let store = KeybindingStore::new(path).unwrap();

    let report = store.load(true).unwrap();
    assert_eq!(report.schema, Schema::Current);
    assert_eq!(
        report.table.get(Action::Cancel),
        Some(&Keybinding::new([PhysicalKey::Q], false))
    );
}

#[test]
fn test_load_legacy_document() {
    let (_temp_dir, path) = create_test_file(r#"{ "Cancel": ["Q"] }"#);
    let store = KeybindingStore::new(path).unwrap();

    let report = store.load(true).unwrap();
    assert_eq!(report.schema, Schema::Legacy);
}

#[test]
fn test_load_invalid_json() {
    let (_temp_dir, path) = create_test_file("not json at all");
    let store = KeybindingStore::new(path).unwrap();

    assert!(matches!(
        store.load(true),
        Err(ConfigError::Decode(DecodeError::Malformed(_)))
    ));
}

#[test]
fn test_load_unknown_schema() {
    let (_temp_dir, path) = create_test_file(r#"[1, 2, 3]"#);
    let store = KeybindingStore::new(path).unwrap();

    assert!(matches!(
        store.load(true),
        Err(ConfigError::Decode(DecodeError::BothSchemasFailed { .. }))
    ));
}

#[test]
fn test_save_writes_current_schema_and_backup() {
    let original = r#"{ "Cancel": ["Q"] }"#;
    let (_temp_dir, path) = create_test_file(original);
    let store = KeybindingStore::new(path.clone()).unwrap();

    let table = store.load(true).unwrap().table;
    let backup_path = store.save(&table).unwrap();

    // Backup holds the old content
    assert!(backup_path.exists(), "Backup file should exist");
    assert_eq!(backup_path.parent().unwrap(), store.backup_dir());
    assert_eq!(fs::read_to_string(&backup_path).unwrap(), original);

    // File now reads back through the current schema unchanged
    let report = store.load(true).unwrap();
    assert_eq!(report.schema, Schema::Current);
    assert_eq!(report.table, table);
    assert_eq!(
        report.table.get(Action::MoveFocusLeft).cloned(),
        default_binding(Action::MoveFocusLeft)
    );
}

#[test]
fn test_backup_filename_format() {
    let (_temp_dir, path) = create_test_file("{}");
    let store = KeybindingStore::new(path).unwrap();

    let backup_path = store.create_timestamped_backup().unwrap();
    let filename = backup_path.file_name().unwrap().to_str().unwrap();

    // "keybindings.json.2025-10-10_221500" -> "2025-10-10_221500"
    let timestamp = filename
        .strip_prefix("keybindings.json.")
        .expect("Backup should be named after the original file");

    let parsed = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d_%H%M%S");
    assert!(parsed.is_ok(), "Timestamp should be valid chrono format: {}", timestamp);
}

#[test]
fn test_save_skipped_entries_are_dropped() {
    let (_temp_dir, path) = create_test_file(
        r#"{ "FutureAction": { "Keys": ["A"], "IsDirectMode": false }, "Cancel": null }"#,
    );
    let store = KeybindingStore::new(path).unwrap();

    let report = store.load(true).unwrap();
    assert_eq!(report.skipped.len(), 1);
    store.save(&report.table).unwrap();

    let content = store.read().unwrap();
    assert!(!content.contains("FutureAction"));
    assert!(content.contains("\"Cancel\": null"));
}

#[test]
fn test_back_to_back_saves_keep_original_backup() {
    let original = r#"{ "Cancel": ["Q"] }"#;
    let (_temp_dir, path) = create_test_file(original);
    let store = KeybindingStore::new(path).unwrap();

    let mut table = store.load(true).unwrap().table;
    let backup1 = store.save(&table).unwrap();

    table.unbind(Action::MoveUp);
    let backup2 = store.save(&table).unwrap();

    assert_ne!(backup1, backup2, "Each save should get its own backup");
    assert_eq!(fs::read_to_string(&backup1).unwrap(), original);
    assert_ne!(fs::read_to_string(&backup2).unwrap(), original);

    let backups = fs::read_dir(store.backup_dir()).unwrap().count();
    assert_eq!(backups, 2);
}

#[test]
fn test_migrate_legacy_file() {
    let original = r#"{ "Cancel": ["Q"] }"#;
    let (_temp_dir, path) = create_test_file(original);
    let store = KeybindingStore::new(path).unwrap();

    let backup = store.migrate().unwrap().expect("Legacy file should be rewritten");
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);

    let report = store.load(true).unwrap();
    assert_eq!(report.schema, Schema::Current);
    assert_eq!(
        report.table.get(Action::Cancel),
        Some(&Keybinding::new([PhysicalKey::Q], false))
    );
}

#[test]
fn test_migrate_current_file_is_untouched() {
    // An entry from a newer release must not be dropped by a rewrite
    let original = r#"{ "FutureAction": { "Keys": ["A"], "IsDirectMode": false } }"#;
    let (_temp_dir, path) = create_test_file(original);
    let store = KeybindingStore::new(path).unwrap();

    assert_eq!(store.migrate().unwrap(), None);
    assert_eq!(store.read().unwrap(), original);
    assert_eq!(fs::read_dir(store.backup_dir()).unwrap().count(), 0);
}
