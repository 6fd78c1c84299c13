// Rust guideline compliant 2026-10-19

//! Unit tests for the JSON file backend.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use leitner_core::storage::{decode_cards, Backend};
use leitner_core::{Error, FlashcardStore, JsonFileBackend, NewCard};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_as_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let backend =
        JsonFileBackend::new(temp_dir.path().join("cards.json")).expect("Failed to create backend");

    assert_eq!(backend.load().expect("load"), None);

    let store = FlashcardStore::open(backend).expect("Failed to open store");
    assert!(store.is_empty());
}

#[test]
fn test_blank_file_loads_as_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cards.json");
    fs::write(&path, "\n").expect("Failed to write file");

    let backend = JsonFileBackend::new(path).expect("Failed to create backend");
    assert_eq!(backend.load().expect("load"), None);
}

#[test]
fn test_save_creates_parent_directory_and_leaves_no_temp_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("cards.json");
    let backend = JsonFileBackend::new(path.clone()).expect("Failed to create backend");

    backend.save("[]").expect("save");

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(fs::read_to_string(&path).expect("read").trim(), "[]");
}

#[test]
fn test_store_persists_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cards.json");

    let card_id = {
        let backend = JsonFileBackend::new(path.clone()).expect("Failed to create backend");
        let mut store = FlashcardStore::open(backend).expect("Failed to open store");
        let card = store
            .create(NewCard::new("Ciao", "سلام").with_course("italian"))
            .expect("create");
        store.review(&card.id, true).expect("review");
        card.id
    };

    let raw = fs::read_to_string(&path).expect("read");
    let on_disk = decode_cards(&raw).expect("decode");
    assert_eq!(on_disk.len(), 1);
    assert!(raw.contains("\"box\": 2"));
    assert!(raw.contains("\"courseId\": \"italian\""));

    let backend = JsonFileBackend::new(path).expect("Failed to create backend");
    let store = FlashcardStore::open(backend).expect("Failed to reopen store");
    let card = store.get(&card_id).expect("get");
    assert_eq!(card.back, "سلام");
    assert_eq!(card.review_count, 1);
}

#[test]
fn test_corrupt_file_is_invalid_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cards.json");
    fs::write(&path, "{\"cards\": [").expect("Failed to write file");

    let backend = JsonFileBackend::new(path.clone()).expect("Failed to create backend");
    let result = FlashcardStore::open(backend);
    assert!(matches!(result, Err(Error::InvalidFormat(_))));

    // The unreadable file is left alone for the user to inspect.
    assert_eq!(fs::read_to_string(&path).expect("read"), "{\"cards\": [");
}

#[test]
fn test_lock_is_reacquirable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let backend = JsonFileBackend::new(temp_dir.path().join("cards.json"))
        .expect("Failed to create backend");

    let first = backend.with_lock(|| Ok(42));
    assert_eq!(first.expect("first lock"), 42);

    backend.save("[]").expect("save takes the lock itself");

    let loaded = backend.with_lock(|| backend.load());
    assert!(loaded.is_ok(), "Lock should be released and reacquirable");
}

#[test]
fn test_unwritable_location_is_persistence_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("not-a-dir");
    fs::write(&blocker, "file").expect("Failed to write file");

    let backend =
        JsonFileBackend::new(blocker.join("cards.json")).expect("Failed to create backend");
    let err = backend.save("[]").unwrap_err();
    assert!(matches!(err, Error::PersistenceFailure(_)));
}
