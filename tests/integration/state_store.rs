//! Integration tests for state persistence

use dirsum::state::StateStore;
use dirsum::types::Digest;
use std::fs;
use tempfile::TempDir;

/// Test that save followed by load returns the saved digest
#[test]
fn test_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let location = temp_dir.path().join("state.json");

    let digest = Digest::from_hex("0123456789abcdef0123456789abcdef");
    StateStore::save(&location, &digest).unwrap();

    assert_eq!(StateStore::load(&location), Some(digest));
}

/// Test that load on a nonexistent file returns absent, not an error
#[test]
fn test_load_nonexistent_is_absent() {
    let temp_dir = TempDir::new().unwrap();

    let loaded = StateStore::load(&temp_dir.path().join("never_written.json"));
    assert_eq!(loaded, None);
}

/// Test that load on corrupted content returns absent, not an error
#[test]
fn test_load_corrupted_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let location = temp_dir.path().join("state.json");

    fs::write(&location, "\x00\x01 definitely not json").unwrap();

    assert_eq!(StateStore::load(&location), None);
}

/// Test that load tolerates fields from a future format
#[test]
fn test_load_ignores_unrecognized_fields() {
    let temp_dir = TempDir::new().unwrap();
    let location = temp_dir.path().join("state.json");

    fs::write(
        &location,
        r#"{"hash": "abc123", "generated_at": "2024-01-01", "tool": "dirsum"}"#,
    )
    .unwrap();

    assert_eq!(StateStore::load(&location), Some(Digest::from_hex("abc123")));
}

/// Test that save creates missing parent directories
#[test]
fn test_save_creates_missing_parents() {
    let temp_dir = TempDir::new().unwrap();
    let location = temp_dir
        .path()
        .join("build")
        .join("cache")
        .join("state.json");

    let digest = Digest::from_hex("abc123");
    StateStore::save(&location, &digest).unwrap();

    assert!(location.exists());
    assert_eq!(StateStore::load(&location), Some(digest));
}

/// Test that repeated saves overwrite rather than append
#[test]
fn test_save_overwrites_not_appends() {
    let temp_dir = TempDir::new().unwrap();
    let location = temp_dir.path().join("state.json");

    StateStore::save(&location, &Digest::from_hex("first")).unwrap();
    let size_first = fs::metadata(&location).unwrap().len();

    StateStore::save(&location, &Digest::from_hex("later")).unwrap();
    let size_later = fs::metadata(&location).unwrap().len();

    assert_eq!(size_first, size_later);
    assert_eq!(StateStore::load(&location), Some(Digest::from_hex("later")));
}
