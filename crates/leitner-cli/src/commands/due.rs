// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn due` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;

/// Lists the cards due for review now, optionally within one course.
///
/// # Errors
///
/// Returns an error if the collection cannot be read.
pub fn execute(ctx: &DataDir, course: Option<&str>, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = ctx.open_store()?;
    let cards = store.due_cards(course);
    println!("{}", formatter.format_list(&cards));
    Ok(())
}
