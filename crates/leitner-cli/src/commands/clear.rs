// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn clear` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use leitner_core::Error;
use serde_json::json;

/// Deletes every card. Requires `confirmed` since the operation is irreversible.
///
/// # Errors
///
/// Returns an error if:
/// - `confirmed` is false
/// - The empty collection cannot be saved
pub fn execute(ctx: &DataDir, confirmed: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    if !confirmed {
        return Err(Error::InvalidInput(
            "Refusing to delete every card without --yes".to_string(),
        )
        .into());
    }

    let mut store = ctx.open_store()?;
    let removed = store.len();
    store.clear_all()?;

    println!(
        "{}",
        formatter.format_success(
            &format!("Removed {} cards", removed),
            &json!({ "removed": removed }),
        )
    );

    Ok(())
}
