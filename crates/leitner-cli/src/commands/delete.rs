// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn delete` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use serde_json::json;

/// Deletes one card by ID.
///
/// # Errors
///
/// Returns an error if the card does not exist or the collection cannot be saved.
pub fn execute(ctx: &DataDir, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut store = ctx.open_store()?;
    store.delete(id)?;

    println!(
        "{}",
        formatter.format_success(&format!("Deleted card {}", id), &json!({ "deleted": id }))
    );

    Ok(())
}
