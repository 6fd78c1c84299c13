// Rust guideline compliant 2026-10-19

//! Aggregate statistics over flashcards.

use crate::{CourseCount, Flashcard, Stats};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Rounded percentage of `correct` over `reviews`; 0 when there are no reviews.
#[must_use]
pub fn success_rate(correct: u64, reviews: u64) -> u32 {
    if reviews == 0 {
        return 0;
    }
    (100.0 * correct as f64 / reviews as f64).round() as u32
}

/// Aggregates statistics over `cards` at `now`.
pub fn compute<'a, I>(cards: I, now: DateTime<Utc>) -> Stats
where
    I: IntoIterator<Item = &'a Flashcard>,
{
    let mut stats = Stats::default();

    for card in cards {
        stats.total += 1;
        if card.is_due(now) {
            stats.cards_due += 1;
        }
        *stats
            .box_distribution
            .entry(card.leitner_box.get())
            .or_insert(0) += 1;
        stats.total_reviews += u64::from(card.review_count);
        stats.total_correct += u64::from(card.correct_count);
    }

    stats.success_rate = success_rate(stats.total_correct, stats.total_reviews);
    stats
}

/// Counts cards per course tag, in order of first appearance.
///
/// Cards without a course are left out entirely.
pub fn courses(cards: &[Flashcard]) -> Vec<CourseCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut result: Vec<CourseCount> = Vec::new();

    for course_id in cards.iter().filter_map(|card| card.course_id.as_deref()) {
        match positions.get(course_id) {
            Some(&pos) => result[pos].count += 1,
            None => {
                positions.insert(course_id, result.len());
                result.push(CourseCount {
                    id: course_id.to_string(),
                    count: 1,
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxLevel;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn card(id: &str, course: Option<&str>) -> Flashcard {
        let mut card = Flashcard::new(id.into(), "f".into(), "b".into(), now());
        card.course_id = course.map(str::to_string);
        card
    }

    #[test]
    fn test_success_rate_rounding() {
        assert_eq!(success_rate(0, 0), 0);
        assert_eq!(success_rate(2, 3), 67);
        assert_eq!(success_rate(1, 3), 33);
        assert_eq!(success_rate(1, 2), 50);
        assert_eq!(success_rate(1, 8), 13);
    }

    #[test]
    fn test_empty_collection_stats() {
        let stats = compute(&Vec::<Flashcard>::new(), now());
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.box_distribution.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_compute_sums_counters() {
        let mut a = card("a", None);
        a.review_count = 4;
        a.correct_count = 3;
        a.leitner_box = BoxLevel::new(3).unwrap();
        a.last_review_date = Some(now());
        let b = card("b", None);

        let stats = compute(&[a, b], now());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.cards_due, 1);
        assert_eq!(stats.box_distribution[&1], 1);
        assert_eq!(stats.box_distribution[&3], 1);
        assert_eq!(stats.total_reviews, 4);
        assert_eq!(stats.total_correct, 3);
        assert_eq!(stats.success_rate, 75);
    }

    #[test]
    fn test_courses_in_first_appearance_order() {
        let cards = vec![
            card("a", Some("spanish")),
            card("b", None),
            card("c", Some("italian")),
            card("d", Some("spanish")),
        ];
        let result = courses(&cards);
        assert_eq!(
            result,
            vec![
                CourseCount { id: "spanish".into(), count: 2 },
                CourseCount { id: "italian".into(), count: 1 },
            ]
        );
    }
}
