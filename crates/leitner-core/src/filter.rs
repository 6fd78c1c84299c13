// Rust guideline compliant 2026-10-19

//! Filtering helpers for flashcard listings.

use crate::{BoxLevel, Flashcard};
use chrono::{DateTime, Utc};
use rayon::prelude::*;

/// Collections at least this large are filtered in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Filters for `list`. Every field set must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Exact course tag.
    pub course_id: Option<String>,
    /// Exact lesson tag.
    pub lesson_id: Option<String>,
    /// Exact box.
    pub leitner_box: Option<BoxLevel>,
    /// `Some(true)` keeps due cards, `Some(false)` keeps cards not yet due.
    pub due_for_review: Option<bool>,
}

impl CardFilter {
    /// Filter selecting the cards due for review, optionally within a course.
    #[must_use]
    pub fn due(course_id: Option<&str>) -> Self {
        Self {
            course_id: course_id.map(str::to_string),
            due_for_review: Some(true),
            ..Self::default()
        }
    }

    /// Filter selecting every card of a course, or all cards.
    #[must_use]
    pub fn course(course_id: Option<&str>) -> Self {
        Self {
            course_id: course_id.map(str::to_string),
            ..Self::default()
        }
    }

    /// Returns true if `card` passes every set criterion at `now`.
    #[must_use]
    pub fn matches(&self, card: &Flashcard, now: DateTime<Utc>) -> bool {
        if let Some(ref course_id) = self.course_id {
            if card.course_id.as_deref() != Some(course_id.as_str()) {
                return false;
            }
        }

        if let Some(ref lesson_id) = self.lesson_id {
            if card.lesson_id.as_deref() != Some(lesson_id.as_str()) {
                return false;
            }
        }

        if let Some(level) = self.leitner_box {
            if card.leitner_box != level {
                return false;
            }
        }

        if let Some(due) = self.due_for_review {
            if card.is_due(now) != due {
                return false;
            }
        }

        true
    }
}

/// Returns clones of the cards matching `filter`, in collection order.
pub fn filter_cards(cards: &[Flashcard], filter: &CardFilter, now: DateTime<Utc>) -> Vec<Flashcard> {
    if cards.len() >= PARALLEL_THRESHOLD {
        cards
            .par_iter()
            .filter(|card| filter.matches(card, now))
            .cloned()
            .collect()
    } else {
        cards
            .iter()
            .filter(|card| filter.matches(card, now))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap()
    }

    fn sample(id: &str, course: Option<&str>, level: u8, reviewed_days_ago: Option<i64>) -> Flashcard {
        let mut card = Flashcard::new(id.into(), "front".into(), "back".into(), now());
        card.course_id = course.map(str::to_string);
        card.leitner_box = BoxLevel::new(level).unwrap();
        card.last_review_date = reviewed_days_ago.map(|days| now() - Duration::days(days));
        card
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let cards = vec![sample("a", None, 1, None), sample("b", Some("x"), 2, Some(0))];
        let ids: Vec<String> = filter_cards(&cards, &CardFilter::default(), now())
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let cards = vec![
            sample("a", Some("x"), 2, Some(0)),
            sample("b", Some("x"), 2, Some(3)),
            sample("c", Some("y"), 2, Some(3)),
        ];
        let filter = CardFilter {
            course_id: Some("x".into()),
            leitner_box: Some(BoxLevel::new(2).unwrap()),
            due_for_review: Some(true),
            ..CardFilter::default()
        };
        let result = filter_cards(&cards, &filter, now());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_not_due_filter() {
        let cards = vec![sample("a", None, 1, None), sample("b", None, 5, Some(1))];
        let filter = CardFilter {
            due_for_review: Some(false),
            ..CardFilter::default()
        };
        let result = filter_cards(&cards, &filter, now());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_course_filter_skips_untagged_cards() {
        let cards = vec![sample("a", None, 1, None)];
        assert!(filter_cards(&cards, &CardFilter::course(Some("x")), now()).is_empty());
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let cards: Vec<Flashcard> = (0..1_500)
            .map(|i| sample(&format!("c{i}"), Some(if i % 3 == 0 { "x" } else { "y" }), 1, None))
            .collect();
        let result = filter_cards(&cards, &CardFilter::course(Some("x")), now());
        assert_eq!(result.len(), 500);
        assert_eq!(result[0].id, "c0");
        assert_eq!(result[1].id, "c3");
    }
}
