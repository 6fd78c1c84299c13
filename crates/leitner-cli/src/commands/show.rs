// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn show` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;

/// Shows one card by ID.
///
/// # Errors
///
/// Returns an error if the card does not exist or the collection cannot be read.
pub fn execute(ctx: &DataDir, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = ctx.open_store()?;
    let card = store.get(id)?;
    println!("{}", formatter.format_card(&card));
    Ok(())
}
