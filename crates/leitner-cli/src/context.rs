// Rust guideline compliant 2026-10-19

//! Data directory discovery and store access for CLI commands.

use leitner_core::{Config, FlashcardStore, JsonFileBackend};
use std::path::{Path, PathBuf};

/// Default data directory name, relative to the working directory.
pub const DATA_DIR: &str = ".leitner";

/// Environment variable naming an explicit data directory.
pub const DIR_ENV: &str = "LEITNER_DIR";

/// The data directory has not been initialized with `ltn init`.
#[derive(Debug, thiserror::Error)]
#[error("Leitner data directory not found at {}. Run 'ltn init' first.", path.display())]
pub struct NotInitialized {
    /// Directory that was expected to exist.
    pub path: PathBuf,
}

/// Resolves the data directory from `--dir`, then `LEITNER_DIR`, then
/// `.leitner` in the working directory.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
pub fn resolve_data_dir(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    Ok(std::env::current_dir()?.join(DATA_DIR))
}

/// An initialized data directory together with its loaded configuration.
#[derive(Debug, Clone)]
pub struct DataDir {
    dir: PathBuf,
    config: Config,
}

impl DataDir {
    /// Wraps an existing data directory.
    ///
    /// # Errors
    ///
    /// Returns [`NotInitialized`] if `dir` does not exist.
    pub fn open(dir: PathBuf, config: Config) -> Result<Self, NotInitialized> {
        if !dir.is_dir() {
            return Err(NotInitialized { path: dir });
        }
        Ok(Self { dir, config })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the path of the card collection file.
    #[must_use]
    pub fn cards_path(&self) -> PathBuf {
        self.config.cards_path(&self.dir)
    }

    /// Opens the flashcard store backed by the collection file.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be read.
    pub fn open_store(&self) -> leitner_core::Result<FlashcardStore<JsonFileBackend>> {
        let backend = JsonFileBackend::new(self.cards_path())?;
        FlashcardStore::open(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/decks"))).expect("resolve");
        assert_eq!(dir, PathBuf::from("/tmp/decks"));
    }

    #[test]
    fn test_open_requires_existing_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join(".leitner");

        let err = DataDir::open(missing.clone(), Config::default()).unwrap_err();
        assert_eq!(err.path, missing);
        assert!(err.to_string().contains("ltn init"));
    }

    #[test]
    fn test_open_store_on_fresh_dir_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir =
            DataDir::open(temp_dir.path().to_path_buf(), Config::default()).expect("open");

        assert_eq!(data_dir.cards_path(), temp_dir.path().join("cards.json"));
        let store = data_dir.open_store().expect("store");
        assert!(store.is_empty());
    }
}
