// Rust guideline compliant 2026-10-19

//! Implementation of the `ltn update` command.
//!
//! Applies a shallow patch to one card. Only the named fields change.

use crate::{DataDir, OutputFormatter};
use anyhow::Result;
use leitner_core::{BoxLevel, CardPatch, Error};

/// Field edits supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct UpdateArgs {
    /// New prompt text.
    pub front: Option<String>,
    /// New answer text.
    pub back: Option<String>,
    /// New box.
    pub leitner_box: Option<u8>,
    /// New course tag.
    pub course: Option<String>,
    /// New lesson tag.
    pub lesson: Option<String>,
    /// Remove the course tag.
    pub clear_course: bool,
    /// Remove the lesson tag.
    pub clear_lesson: bool,
    /// Forget the last review, making the card due now.
    pub reset_review: bool,
}

impl UpdateArgs {
    /// Converts the arguments into a store patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the box is outside 1..=5.
    pub fn into_patch(self) -> leitner_core::Result<CardPatch> {
        let course_id = match (self.course, self.clear_course) {
            (Some(course), _) => Some(Some(course)),
            (None, true) => Some(None),
            (None, false) => None,
        };
        let lesson_id = match (self.lesson, self.clear_lesson) {
            (Some(lesson), _) => Some(Some(lesson)),
            (None, true) => Some(None),
            (None, false) => None,
        };

        Ok(CardPatch {
            front: self.front,
            back: self.back,
            leitner_box: self.leitner_box.map(BoxLevel::new).transpose()?,
            last_review_date: self.reset_review.then_some(None),
            course_id,
            lesson_id,
            source_page: None,
        })
    }
}

/// Updates a card and prints the result.
///
/// # Errors
///
/// Returns an error if:
/// - No field was given
/// - The card does not exist
/// - The collection cannot be saved
pub fn execute(
    ctx: &DataDir,
    id: &str,
    args: UpdateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let patch = args.into_patch()?;
    if patch.is_empty() {
        return Err(Error::InvalidInput("No fields to update".to_string()).into());
    }

    let mut store = ctx.open_store()?;
    let card = store.update(id, patch)?;

    println!("{}", formatter.format_card(&card));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_make_empty_patch() {
        let patch = UpdateArgs::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_clear_flags_map_to_some_none() {
        let patch = UpdateArgs {
            clear_course: true,
            reset_review: true,
            ..UpdateArgs::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch.course_id, Some(None));
        assert_eq!(patch.last_review_date, Some(None));
        assert_eq!(patch.lesson_id, None);
    }

    #[test]
    fn test_box_is_validated() {
        let args = UpdateArgs {
            leitner_box: Some(0),
            ..UpdateArgs::default()
        };
        assert!(matches!(args.into_patch(), Err(Error::InvalidInput(_))));
    }
}
