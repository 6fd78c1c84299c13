// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn list` command.
//!
//! Lists cards with optional filtering by course, lesson, box and due state.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use leitner_core::{BoxLevel, CardFilter};

/// Builds a card filter from command-line options.
///
/// `due` and `not_due` are mutually exclusive at the argument parser.
///
/// # Errors
///
/// Returns an error if `leitner_box` is outside 1..=5.
pub fn build_filter(
    course: Option<String>,
    lesson: Option<String>,
    leitner_box: Option<u8>,
    due: bool,
    not_due: bool,
) -> Result<CardFilter> {
    let leitner_box = leitner_box.map(BoxLevel::new).transpose()?;
    let due_for_review = match (due, not_due) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };

    Ok(CardFilter {
        course_id: course,
        lesson_id: lesson,
        leitner_box,
        due_for_review,
    })
}

/// Lists the cards matching `filter` in stored order.
///
/// # Errors
///
/// Returns an error if the collection cannot be read.
pub fn execute(ctx: &DataDir, filter: &CardFilter, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = ctx.open_store()?;
    let cards = store.list(filter);
    println!("{}", formatter.format_list(&cards));
    Ok(())
}
