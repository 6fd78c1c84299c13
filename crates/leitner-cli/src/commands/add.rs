// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn add` command.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use leitner_core::{Error, NewCard};

/// Card text and tags supplied on the command line.
#[derive(Debug, Clone)]
pub struct AddArgs {
    /// Prompt text.
    pub front: String,
    /// Answer text.
    pub back: String,
    /// Optional course tag.
    pub course: Option<String>,
    /// Optional lesson tag.
    pub lesson: Option<String>,
    /// Optional provenance metadata as a JSON document.
    pub source_page: Option<String>,
}

/// Adds a new card in box 1.
///
/// # Errors
///
/// Returns an error if:
/// - Either side is shorter than the configured `min_text_length`
/// - `source_page` is not valid JSON
/// - The collection cannot be saved
pub fn execute(ctx: &DataDir, args: AddArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let min_len = ctx.config().min_text_length;
    for (side, text) in [("Front", &args.front), ("Back", &args.back)] {
        if text.trim().chars().count() < min_len {
            return Err(Error::InvalidInput(format!(
                "{} must be at least {} characters",
                side, min_len
            ))
            .into());
        }
    }

    let mut input = NewCard::new(args.front, args.back);
    if let Some(course) = args.course {
        input = input.with_course(course);
    }
    if let Some(lesson) = args.lesson {
        input = input.with_lesson(lesson);
    }
    if let Some(raw) = args.source_page {
        let value = serde_json::from_str(&raw)
            .map_err(|e| Error::InvalidInput(format!("source page is not JSON: {}", e)))?;
        input = input.with_source_page(value);
    }

    let mut store = ctx.open_store()?;
    let card = store.create(input)?;

    println!("{}", formatter.format_card(&card));

    Ok(())
}
