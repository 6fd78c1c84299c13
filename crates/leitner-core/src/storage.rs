// Rust guideline compliant 2026-10-19

//! Persistence backends for the flashcard collection.
//!
//! The collection lives in a single slot as a serialized JSON array of
//! flashcards. A backend only moves that blob in and out; decoding and
//! validation happen in [`decode_cards`] so every backend shares them.

use crate::{Error, Flashcard, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Raw storage for the serialized collection.
pub trait Backend {
    /// Reads the stored blob, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored blob.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the write does not complete.
    fn save(&self, blob: &str) -> Result<()>;
}

/// Serializes a collection into the stored representation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_cards(cards: &[Flashcard]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// Parses and validates a serialized collection.
///
/// # Errors
///
/// Returns `InvalidFormat` if:
/// - The payload is not a JSON array of card-shaped records
/// - A card violates its invariants (blank ID, more correct than total reviews)
/// - Two cards share an ID
pub fn decode_cards(blob: &str) -> Result<Vec<Flashcard>> {
    let cards: Vec<Flashcard> = serde_json::from_str(blob)
        .map_err(|e| Error::InvalidFormat(format!("Expected an array of flashcards: {}", e)))?;

    let mut seen = HashSet::with_capacity(cards.len());
    for card in &cards {
        card.validate()?;
        if !seen.insert(card.id.as_str()) {
            return Err(Error::InvalidFormat(format!(
                "Duplicate flashcard ID: {}",
                card.id
            )));
        }
    }

    Ok(cards)
}

/// In-memory backend.
///
/// Clones share the same slot, so a test can inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<Mutex<bool>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with `blob`.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.lock_slot() = Some(blob.into());
        backend
    }

    /// Makes every subsequent save fail, simulating a full quota.
    pub fn set_fail_saves(&self, fail: bool) {
        *self
            .fail_saves
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = fail;
    }

    /// Returns the currently stored blob.
    pub fn blob(&self) -> Option<String> {
        self.lock_slot().clone()
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob())
    }

    fn save(&self, blob: &str) -> Result<()> {
        let failing = *self
            .fail_saves
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if failing {
            return Err(Error::PersistenceFailure(
                "Storage quota exceeded".to_string(),
            ));
        }
        *self.lock_slot() = Some(blob.to_string());
        Ok(())
    }
}

/// Backend storing the collection in one JSON file.
///
/// Writes go to a temp file in the same directory and are renamed into
/// place while holding an exclusive lock on a sibling `.lock` file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend for the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidInput(
                "Storage path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the path of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Executes a closure with an exclusive lock on the collection file.
    ///
    /// Blocks until the lock is available; the lock is released when the
    /// closure returns, whether or not it succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock file cannot be opened or locked
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| persistence_error("open lock file", &lock_path, e))?;

        lock_file
            .lock_exclusive()
            .map_err(|e| persistence_error("acquire lock on", &lock_path, e))?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }

    fn write_atomic(&self, blob: &str) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let temp_path = self.path.with_extension("json.tmp");

        {
            let mut file =
                File::create(&temp_path).map_err(|e| persistence_error("create", &temp_path, e))?;
            file.write_all(blob.as_bytes())
                .and_then(|()| file.write_all(b"\n"))
                .and_then(|()| file.sync_all())
                .map_err(|e| persistence_error("write", &temp_path, e))?;
        }

        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| persistence_error("replace", &self.path, e))
    }
}

impl Backend for JsonFileBackend {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| persistence_error("read", &self.path, e))?;

        // A freshly initialized empty file counts as "nothing saved yet".
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    fn save(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| persistence_error("create directory", parent, e))?;
            }
        }

        self.with_lock(|| self.write_atomic(blob))
    }
}

fn persistence_error(action: &str, path: &Path, err: std::io::Error) -> Error {
    Error::PersistenceFailure(format!("Failed to {} {}: {}", action, path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_cards(r#"{"cards": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let blob = r#"[
            {"id":"a","front":"x","back":"y","box":1,"createdDate":"2026-01-01T00:00:00Z"},
            {"id":"a","front":"z","back":"w","box":2,"createdDate":"2026-01-01T00:00:00Z"}
        ]"#;
        let err = decode_cards(blob).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_cards("[]").unwrap().is_empty());
    }

    #[test]
    fn test_memory_backend_failure_switch() {
        let backend = MemoryBackend::new();
        backend.save("[]").unwrap();

        backend.set_fail_saves(true);
        let err = backend.save("[1]").unwrap_err();
        assert!(matches!(err, Error::PersistenceFailure(_)));
        assert_eq!(backend.blob().as_deref(), Some("[]"));

        backend.set_fail_saves(false);
        backend.save("[2]").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_file_backend_rejects_empty_path() {
        assert!(JsonFileBackend::new(PathBuf::new()).is_err());
    }
}
