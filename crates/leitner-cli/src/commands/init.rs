// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn init` command.
//!
//! Creates the data directory with a default configuration and an empty
//! card collection.

use crate::OutputFormatter;
use anyhow::Result;
use leitner_core::config::CONFIG_FILE;
use leitner_core::storage::Backend;
use leitner_core::{Config, JsonFileBackend};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Initializes a data directory.
///
/// Existing files are left untouched, so running `init` twice is harmless.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The configuration or collection file cannot be written
pub fn execute(data_dir: &Path, config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(data_dir)?;
    }

    let cards_path = config.cards_path(data_dir);
    if !cards_path.exists() {
        JsonFileBackend::new(cards_path.clone())?.save("[]")?;
    }

    println!(
        "{}",
        formatter.format_success(
            &format!("Leitner data directory initialized at {}", data_dir.display()),
            &json!({
                "dataDir": data_dir,
                "config": config_path,
                "cards": cards_path,
            }),
        )
    );

    Ok(())
}
