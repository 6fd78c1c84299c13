// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn export` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use leitner_core::Error;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Writes the whole collection as a JSON array.
///
/// Without `output` the snapshot goes to stdout unchanged, whatever the
/// output format, so it can be piped into `ltn import`.
///
/// # Errors
///
/// Returns an error if the collection cannot be read or the output file
/// cannot be written.
pub fn execute(ctx: &DataDir, output: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = ctx.open_store()?;
    let snapshot = store.export_all()?;

    match output {
        Some(path) => {
            fs::write(path, &snapshot).map_err(|e| {
                Error::PersistenceFailure(format!("cannot write {}: {}", path.display(), e))
            })?;
            println!(
                "{}",
                formatter.format_success(
                    &format!("Exported {} cards to {}", store.len(), path.display()),
                    &json!({ "exported": store.len(), "path": path }),
                )
            );
        }
        None => println!("{}", snapshot),
    }

    Ok(())
}
