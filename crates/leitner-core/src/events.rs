// Rust guideline compliant 2026-10-19

//! Change notifications emitted by the store after each mutation.

use crate::Flashcard;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// What kind of mutation produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A card was created.
    Created,
    /// A card was edited through `update`.
    Updated,
    /// A card was deleted.
    Deleted,
    /// A card was reviewed.
    Reviewed,
    /// The whole collection was replaced by an import.
    Imported,
    /// The collection was emptied.
    Cleared,
}

/// A "collection changed" signal.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// The mutation that happened.
    pub kind: ChangeKind,
    /// The card concerned, for single-card mutations.
    pub card_id: Option<String>,
    /// The full collection after the mutation.
    pub cards: Arc<Vec<Flashcard>>,
}

/// Fan-out list of subscribers.
///
/// Delivery is fire-and-forget: subscribers whose receiver has been dropped
/// are pruned on the next broadcast, and new subscribers see only events
/// sent after they joined.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<Sender<ChangeEvent>>,
}

impl Subscribers {
    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber.
    pub fn broadcast(&mut self, event: ChangeEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of subscribers still registered.
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: ChangeKind) -> ChangeEvent {
        ChangeEvent {
            kind,
            card_id: None,
            cards: Arc::new(Vec::new()),
        }
    }

    #[test]
    fn test_dropped_receivers_are_pruned() {
        let mut subscribers = Subscribers::default();
        let kept = subscribers.subscribe();
        let dropped = subscribers.subscribe();
        drop(dropped);

        subscribers.broadcast(event(ChangeKind::Cleared));

        assert_eq!(subscribers.len(), 1);
        assert_eq!(kept.try_recv().unwrap().kind, ChangeKind::Cleared);
    }

    #[test]
    fn test_late_subscriber_gets_no_replay() {
        let mut subscribers = Subscribers::default();
        subscribers.broadcast(event(ChangeKind::Created));

        let late = subscribers.subscribe();
        assert!(late.try_recv().is_err());
    }
}
