// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn import` command.
//!
//! Replaces the whole collection with a snapshot produced by `ltn export`.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use leitner_core::Error;
use serde_json::json;
use std::io::Read;
use std::path::Path;

/// Reads a snapshot from `path`, or stdin when `path` is `-`.
fn read_snapshot(path: &Path) -> leitner_core::Result<String> {
    let read = if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|e| Error::InvalidInput(format!("cannot read {}: {}", path.display(), e)))
}

/// Imports a snapshot, replacing every existing card.
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot cannot be read
/// - The snapshot is not an array of valid cards; the collection is unchanged
/// - The collection cannot be saved
pub fn execute(ctx: &DataDir, path: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let snapshot = read_snapshot(path)?;

    let mut store = ctx.open_store()?;
    let count = store.import_all(&snapshot)?;

    println!(
        "{}",
        formatter.format_success(
            &format!("Imported {} cards", count),
            &json!({ "imported": count }),
        )
    );

    Ok(())
}
