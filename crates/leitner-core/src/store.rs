// Rust guideline compliant 2026-10-19

//! The flashcard store.
//!
//! [`FlashcardStore`] owns the whole collection in memory, loaded once when
//! the store is opened, and writes the full collection back to its backend
//! after every mutation. Every mutating method takes `&mut self`, so a
//! single store instance never interleaves writes; wrap it in
//! [`SharedStore`] to share it across threads.
//!
//! If a save fails the error is returned as `PersistenceFailure`, but the
//! in-memory change is kept: memory and storage disagree until the next
//! successful save.

use crate::clock::{Clock, SystemClock};
use crate::events::{ChangeEvent, ChangeKind, Subscribers};
use crate::filter::{filter_cards, CardFilter};
use crate::storage::{decode_cards, encode_cards, Backend};
use crate::{identity, stats, CardPatch, CourseCount, Error, Flashcard, NewCard, Result, Stats};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// A store shared between threads.
pub type SharedStore<B, C = SystemClock> = Arc<Mutex<FlashcardStore<B, C>>>;

/// The Leitner flashcard collection and its operations.
pub struct FlashcardStore<B: Backend, C: Clock = SystemClock> {
    backend: B,
    clock: C,
    cards: Vec<Flashcard>,
    subscribers: Subscribers,
}

impl<B: Backend> FlashcardStore<B, SystemClock> {
    /// Opens a store over `backend` using wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or holds data that is
    /// not a valid flashcard collection.
    pub fn open(backend: B) -> Result<Self> {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: Backend, C: Clock> FlashcardStore<B, C> {
    /// Opens a store over `backend` with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The backend cannot be read (`PersistenceFailure`)
    /// - The stored blob is not a valid collection (`InvalidFormat`)
    pub fn with_clock(backend: B, clock: C) -> Result<Self> {
        let cards = match backend.load()? {
            Some(blob) => decode_cards(&blob).inspect_err(|e| {
                warn!(error = %e, "stored flashcard collection is unreadable");
            })?,
            None => Vec::new(),
        };
        debug!(count = cards.len(), "loaded flashcard collection");

        Ok(Self {
            backend,
            clock,
            cards,
            subscribers: Subscribers::default(),
        })
    }

    /// Wraps the store for sharing across threads.
    pub fn into_shared(self) -> SharedStore<B, C> {
        Arc::new(Mutex::new(self))
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the whole collection in stored order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Number of cards in the collection.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Registers for "collection changed" events.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        self.subscribers.subscribe()
    }

    /// Creates a card in box 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Front or back is empty after trimming (`InvalidInput`)
    /// - The collection cannot be saved (`PersistenceFailure`)
    pub fn create(&mut self, input: NewCard) -> Result<Flashcard> {
        let front = input.front.trim();
        let back = input.back.trim();
        if front.is_empty() {
            return Err(Error::InvalidInput("Front cannot be empty".to_string()));
        }
        if back.is_empty() {
            return Err(Error::InvalidInput("Back cannot be empty".to_string()));
        }

        let now = self.clock.now();
        let id = self.unique_id(front, back, now.timestamp_nanos_opt().unwrap_or_default());

        let mut card = Flashcard::new(id, front.to_string(), back.to_string(), now);
        card.course_id = input.course_id;
        card.lesson_id = input.lesson_id;
        card.source_page = input.source_page;

        self.cards.push(card.clone());
        debug!(card_id = %card.id, "created flashcard");
        self.commit(ChangeKind::Created, Some(&card.id))?;

        Ok(card)
    }

    /// Lists the cards matching `filter`, in stored order.
    pub fn list(&self, filter: &CardFilter) -> Vec<Flashcard> {
        filter_cards(&self.cards, filter, self.clock.now())
    }

    /// Looks up one card.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no card has this ID.
    pub fn get(&self, id: &str) -> Result<Flashcard> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Applies a shallow field merge to one card.
    ///
    /// Front and back are not re-validated here; callers editing text are
    /// expected to check it themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No card has this ID (`NotFound`)
    /// - The collection cannot be saved (`PersistenceFailure`)
    pub fn update(&mut self, id: &str, patch: CardPatch) -> Result<Flashcard> {
        let pos = self.position(id)?;
        patch.apply(&mut self.cards[pos]);
        let card = self.cards[pos].clone();

        debug!(card_id = %id, "updated flashcard");
        self.commit(ChangeKind::Updated, Some(id))?;

        Ok(card)
    }

    /// Removes one card.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No card has this ID (`NotFound`)
    /// - The collection cannot be saved (`PersistenceFailure`)
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let pos = self.position(id)?;
        self.cards.remove(pos);

        debug!(card_id = %id, "deleted flashcard");
        self.commit(ChangeKind::Deleted, Some(id))
    }

    /// Records an answer for one card and moves it between boxes.
    ///
    /// A correct answer promotes the card one box (capped at box 5); an
    /// incorrect answer sends it back to box 1. The review time and both
    /// counters are updated in the same step.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No card has this ID (`NotFound`)
    /// - The collection cannot be saved (`PersistenceFailure`)
    pub fn review(&mut self, id: &str, is_correct: bool) -> Result<Flashcard> {
        let pos = self.position(id)?;
        let now = self.clock.now();
        let from = self.cards[pos].leitner_box;
        self.cards[pos].record_review(is_correct, now);
        let card = self.cards[pos].clone();

        debug!(
            card_id = %id,
            correct = is_correct,
            from_box = from.get(),
            to_box = card.leitner_box.get(),
            "reviewed flashcard"
        );
        self.commit(ChangeKind::Reviewed, Some(id))?;

        Ok(card)
    }

    /// Cards due for review, optionally within one course.
    pub fn due_cards(&self, course_id: Option<&str>) -> Vec<Flashcard> {
        self.list(&CardFilter::due(course_id))
    }

    /// Aggregate statistics, optionally within one course.
    pub fn statistics(&self, course_id: Option<&str>) -> Stats {
        let filter = CardFilter::course(course_id);
        let now = self.clock.now();
        stats::compute(
            self.cards.iter().filter(|card| filter.matches(card, now)),
            now,
        )
    }

    /// Card counts per course tag, in order of first appearance.
    pub fn courses_list(&self) -> Vec<CourseCount> {
        stats::courses(&self.cards)
    }

    /// Serializes the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_all(&self) -> Result<String> {
        encode_cards(&self.cards)
    }

    /// Replaces the whole collection with a serialized snapshot.
    ///
    /// Returns the number of imported cards. Nothing is merged: cards not
    /// present in the snapshot are gone afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payload is not an array of valid cards (`InvalidFormat`);
    ///   the collection is left untouched in that case
    /// - The collection cannot be saved (`PersistenceFailure`)
    pub fn import_all(&mut self, snapshot: &str) -> Result<usize> {
        let cards = decode_cards(snapshot)?;
        let count = cards.len();
        self.cards = cards;

        debug!(count, "imported flashcard collection");
        self.commit(ChangeKind::Imported, None)?;

        Ok(count)
    }

    /// Irreversibly empties the collection.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the empty collection cannot be saved.
    pub fn clear_all(&mut self) -> Result<()> {
        let removed = self.cards.len();
        self.cards.clear();

        debug!(removed, "cleared flashcard collection");
        self.commit(ChangeKind::Cleared, None)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.cards
            .iter()
            .position(|card| card.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn unique_id(&self, front: &str, back: &str, timestamp_nanos: i64) -> String {
        let mut nonce = 0u32;
        loop {
            let id = identity::generate_id(front, back, timestamp_nanos, nonce);
            if !self.cards.iter().any(|card| card.id == id) {
                return id;
            }
            nonce = nonce.wrapping_add(1);
        }
    }

    /// Persists the collection, then notifies subscribers.
    fn commit(&mut self, kind: ChangeKind, card_id: Option<&str>) -> Result<()> {
        let blob = encode_cards(&self.cards)?;
        if let Err(e) = self.backend.save(&blob) {
            warn!(error = %e, ?kind, "failed to persist flashcard collection");
            return Err(match e {
                Error::PersistenceFailure(_) => e,
                other => Error::PersistenceFailure(other.to_string()),
            });
        }

        if !self.subscribers.is_empty() {
            self.subscribers.broadcast(ChangeEvent {
                kind,
                card_id: card_id.map(str::to_string),
                cards: Arc::new(self.cards.clone()),
            });
        }

        Ok(())
    }
}
