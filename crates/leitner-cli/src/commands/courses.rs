// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn courses` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;

/// Lists every course tag with its card count.
///
/// # Errors
///
/// Returns an error if the collection cannot be read.
pub fn execute(ctx: &DataDir, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = ctx.open_store()?;
    println!("{}", formatter.format_courses(&store.courses_list()));
    Ok(())
}
