// Rust guideline compliant 2026-10-19

//! Leitner scheduling rules.
//!
//! The box number is the whole state machine. Transitions:
//!
//! - Correct answer: box N → box N+1, box 5 stays in box 5
//! - Incorrect answer: any box → box 1
//!
//! A card becomes due again once the interval of its box has elapsed since
//! its last review. Cards that were never reviewed are always due.

use crate::{BoxLevel, Flashcard};
use chrono::{DateTime, Duration, Utc};

/// Review interval in days, indexed by `box - 1`.
pub const BOX_INTERVAL_DAYS: [i64; 5] = [1, 2, 4, 8, 16];

/// Returns the review interval, in days, for a box.
#[must_use]
pub fn interval_days(level: BoxLevel) -> i64 {
    BOX_INTERVAL_DAYS[usize::from(level.get() - 1)]
}

/// Returns the review interval for a box as a duration.
#[must_use]
pub fn interval(level: BoxLevel) -> Duration {
    Duration::days(interval_days(level))
}

/// Computes the box a card moves to after an answer.
///
/// # Arguments
///
/// * `current` - The card's box before the review
/// * `is_correct` - Whether the answer was judged correct
///
/// # Returns
///
/// The box after the review.
#[must_use]
pub fn transition(current: BoxLevel, is_correct: bool) -> BoxLevel {
    if is_correct {
        current.promoted()
    } else {
        BoxLevel::FIRST
    }
}

/// Decides whether a card in `level`, last reviewed at `last_review`, is due at `now`.
///
/// This is a pure function: a card never reviewed is due, otherwise it is
/// due once `now >= last_review + interval(level)`. A due instant past the
/// representable range is never reached.
#[must_use]
pub fn is_due(level: BoxLevel, last_review: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_review {
        None => true,
        Some(reviewed_at) => due_at(level, reviewed_at).is_some_and(|due| now >= due),
    }
}

/// Returns the instant a card in `level` reviewed at `reviewed_at` becomes
/// due, or `None` if that instant is out of range.
#[must_use]
pub fn due_at(level: BoxLevel, reviewed_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    reviewed_at.checked_add_signed(interval(level))
}

/// Returns when `card` next becomes due, or `None` if it is due immediately
/// because it has never been reviewed.
///
/// Saturates at the latest representable instant.
#[must_use]
pub fn next_review_date(card: &Flashcard) -> Option<DateTime<Utc>> {
    card.last_review_date
        .map(|reviewed_at| due_at(card.leitner_box, reviewed_at).unwrap_or(DateTime::<Utc>::MAX_UTC))
}

impl Flashcard {
    /// Checks whether this card is due at `now`.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        is_due(self.leitner_box, self.last_review_date, now)
    }

    /// Records a review outcome at `now`.
    ///
    /// Moves the card per [`transition`], stamps the review time and bumps
    /// the counters. `correct_count` only moves together with
    /// `review_count`, so the counter invariant holds after every call.
    pub fn record_review(&mut self, is_correct: bool, now: DateTime<Utc>) {
        self.leitner_box = transition(self.leitner_box, is_correct);
        self.last_review_date = Some(now);
        self.review_count = self.review_count.saturating_add(1);
        if is_correct {
            self.correct_count = self.correct_count.saturating_add(1).min(self.review_count);
        }
    }
}
