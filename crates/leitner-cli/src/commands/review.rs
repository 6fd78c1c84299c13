// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn review` command.
//!
//! Records one review outcome and moves the card between boxes.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;

/// Records a review of `id`.
///
/// # Errors
///
/// Returns an error if the card does not exist or the collection cannot be saved.
pub fn execute(
    ctx: &DataDir,
    id: &str,
    is_correct: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let mut store = ctx.open_store()?;
    let card = store.review(id, is_correct)?;
    println!("{}", formatter.format_card(&card));
    Ok(())
}
