// Rust guideline compliant 2026-10-19

//! Core data models for the Leitner scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest Leitner box; every new card starts here.
pub const MIN_BOX: u8 = 1;

/// Highest Leitner box.
pub const MAX_BOX: u8 = 5;

/// A Leitner box number, guaranteed to lie in `MIN_BOX..=MAX_BOX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoxLevel(u8);

impl BoxLevel {
    /// The first box.
    pub const FIRST: BoxLevel = BoxLevel(MIN_BOX);

    /// The last box.
    pub const LAST: BoxLevel = BoxLevel(MAX_BOX);

    /// Creates a box level, rejecting values outside 1..=5.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `value` is out of range.
    pub fn new(value: u8) -> crate::Result<Self> {
        if (MIN_BOX..=MAX_BOX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(crate::Error::InvalidInput(format!(
                "Box must be {}-{}, got {}",
                MIN_BOX, MAX_BOX, value
            )))
        }
    }

    /// Returns the raw box number.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the next box up, saturating at the last box.
    #[must_use]
    pub fn promoted(self) -> Self {
        Self(self.0.saturating_add(1).min(MAX_BOX))
    }

    /// Iterates over all boxes in ascending order.
    pub fn all() -> impl Iterator<Item = BoxLevel> {
        (MIN_BOX..=MAX_BOX).map(BoxLevel)
    }
}

impl Default for BoxLevel {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for BoxLevel {
    type Error = crate::Error;

    fn try_from(value: u8) -> crate::Result<Self> {
        Self::new(value)
    }
}

impl From<BoxLevel> for u8 {
    fn from(level: BoxLevel) -> Self {
        level.0
    }
}

impl fmt::Display for BoxLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single flashcard and its scheduling state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Opaque identifier, stable for the card's lifetime.
    pub id: String,
    /// Prompt side.
    pub front: String,
    /// Answer side.
    pub back: String,
    /// Current Leitner box.
    #[serde(rename = "box", default)]
    pub leitner_box: BoxLevel,
    /// When the card was last reviewed, if ever.
    #[serde(default)]
    pub last_review_date: Option<DateTime<Utc>>,
    /// Creation instant. Never changes.
    pub created_date: DateTime<Utc>,
    /// Optional course grouping tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    /// Optional lesson grouping tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
    /// Provenance metadata, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_page: Option<serde_json::Value>,
    /// Total review attempts.
    #[serde(default)]
    pub review_count: u32,
    /// Total correct attempts.
    #[serde(default)]
    pub correct_count: u32,
}

impl Flashcard {
    /// Creates a fresh card in the first box with no review history.
    pub fn new(id: String, front: String, back: String, created_date: DateTime<Utc>) -> Self {
        Self {
            id,
            front,
            back,
            leitner_box: BoxLevel::FIRST,
            last_review_date: None,
            created_date,
            course_id: None,
            lesson_id: None,
            source_page: None,
            review_count: 0,
            correct_count: 0,
        }
    }

    /// Checks the structural invariants a stored card must satisfy.
    ///
    /// Front and back text are not checked; `update` may leave them empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the ID is blank or the counters disagree.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidFormat(
                "Flashcard ID cannot be empty".to_string(),
            ));
        }

        if self.correct_count > self.review_count {
            return Err(crate::Error::InvalidFormat(format!(
                "Flashcard {} has correctCount {} greater than reviewCount {}",
                self.id, self.correct_count, self.review_count
            )));
        }

        Ok(())
    }

    /// Percentage of reviews answered correctly, rounded; 0 if never reviewed.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        crate::stats::success_rate(u64::from(self.correct_count), u64::from(self.review_count))
    }
}

/// Input for creating a flashcard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCard {
    /// Prompt side; must be non-empty after trimming.
    pub front: String,
    /// Answer side; must be non-empty after trimming.
    pub back: String,
    /// Optional course tag.
    pub course_id: Option<String>,
    /// Optional lesson tag.
    pub lesson_id: Option<String>,
    /// Optional provenance metadata.
    pub source_page: Option<serde_json::Value>,
}

impl NewCard {
    /// Creates an input with just front and back text.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            ..Self::default()
        }
    }

    /// Tags the card with a course.
    #[must_use]
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Tags the card with a lesson.
    #[must_use]
    pub fn with_lesson(mut self, lesson_id: impl Into<String>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }

    /// Attaches provenance metadata.
    #[must_use]
    pub fn with_source_page(mut self, source_page: serde_json::Value) -> Self {
        self.source_page = Some(source_page);
        self
    }
}

/// A shallow set of field edits applied by `update`.
///
/// `None` leaves a field untouched. For optional fields, `Some(None)` clears
/// the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    /// New prompt text.
    pub front: Option<String>,
    /// New answer text.
    pub back: Option<String>,
    /// New box.
    pub leitner_box: Option<BoxLevel>,
    /// New last review instant.
    pub last_review_date: Option<Option<DateTime<Utc>>>,
    /// New course tag.
    pub course_id: Option<Option<String>>,
    /// New lesson tag.
    pub lesson_id: Option<Option<String>>,
    /// New provenance metadata.
    pub source_page: Option<Option<serde_json::Value>>,
}

impl CardPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch onto `card`.
    pub fn apply(self, card: &mut Flashcard) {
        if let Some(front) = self.front {
            card.front = front;
        }
        if let Some(back) = self.back {
            card.back = back;
        }
        if let Some(level) = self.leitner_box {
            card.leitner_box = level;
        }
        if let Some(date) = self.last_review_date {
            card.last_review_date = date;
        }
        if let Some(course_id) = self.course_id {
            card.course_id = course_id;
        }
        if let Some(lesson_id) = self.lesson_id {
            card.lesson_id = lesson_id;
        }
        if let Some(source_page) = self.source_page {
            card.source_page = source_page;
        }
    }
}

/// Aggregate statistics over a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of matching cards.
    pub total: usize,
    /// Matching cards that are due now.
    pub cards_due: usize,
    /// Card count per box; every box is present.
    pub box_distribution: BTreeMap<u8, usize>,
    /// Sum of review counts.
    pub total_reviews: u64,
    /// Sum of correct counts.
    pub total_correct: u64,
    /// Rounded percentage of correct reviews, 0 when there are none.
    pub success_rate: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total: 0,
            cards_due: 0,
            box_distribution: BoxLevel::all().map(|b| (b.get(), 0)).collect(),
            total_reviews: 0,
            total_correct: 0,
            success_rate: 0,
        }
    }
}

/// Number of cards tagged with one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCount {
    /// Course identifier.
    pub id: String,
    /// Cards carrying that course tag.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_card() -> Flashcard {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        Flashcard::new("card-0000abcd".to_string(), "Ciao".into(), "سلام".into(), created)
    }

    #[test]
    fn test_box_level_range() {
        assert!(BoxLevel::new(0).is_err());
        assert!(BoxLevel::new(6).is_err());
        for value in 1..=5 {
            assert_eq!(BoxLevel::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn test_box_level_promotion_saturates() {
        assert_eq!(BoxLevel::FIRST.promoted().get(), 2);
        assert_eq!(BoxLevel::LAST.promoted(), BoxLevel::LAST);
    }

    #[test]
    fn test_serialized_field_names() {
        let card = sample_card();
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["box"], 1);
        assert_eq!(json["reviewCount"], 0);
        assert!(json["lastReviewDate"].is_null());
        assert!(json.get("createdDate").is_some());
        assert!(json.get("courseId").is_none());
    }

    #[test]
    fn test_out_of_range_box_rejected_on_deserialize() {
        let raw = r#"{"id":"x","front":"a","back":"b","box":9,"createdDate":"2026-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Flashcard>(raw).is_err());
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let raw = r#"{"id":"x","front":"a","back":"b","box":3,"createdDate":"2026-01-01T00:00:00Z"}"#;
        let card: Flashcard = serde_json::from_str(raw).unwrap();
        assert_eq!(card.review_count, 0);
        assert_eq!(card.leitner_box.get(), 3);
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_validate_counter_invariant() {
        let mut card = sample_card();
        card.review_count = 1;
        card.correct_count = 2;
        assert!(card.validate().is_err());
    }

    #[test]
    fn test_patch_clears_optional_fields() {
        let mut card = sample_card();
        card.course_id = Some("italian".into());

        CardPatch {
            course_id: Some(None),
            back: Some("hello".into()),
            ..CardPatch::default()
        }
        .apply(&mut card);

        assert_eq!(card.course_id, None);
        assert_eq!(card.back, "hello");
        assert_eq!(card.front, "Ciao");
    }

    #[test]
    fn test_default_stats_lists_every_box() {
        let stats = Stats::default();
        assert_eq!(stats.box_distribution.len(), 5);
        assert!(stats.box_distribution.values().all(|&count| count == 0));
    }
}
