// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn stats` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;

/// Prints aggregate statistics, optionally restricted to one course.
///
/// # Errors
///
/// Returns an error if the collection cannot be read.
pub fn execute(ctx: &DataDir, course: Option<&str>, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = ctx.open_store()?;
    let stats = store.statistics(course);
    println!("{}", formatter.format_stats(&stats));
    Ok(())
}
