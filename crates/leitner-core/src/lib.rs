// Rust guideline compliant 2026-10-19

//! Leitner Core Library
//!
//! This crate provides the Leitner spaced-repetition flashcard scheduler:
//! - Data models (Flashcard, BoxLevel, Stats)
//! - Scheduling rules (box intervals, due-date predicate, review transition)
//! - Flashcard store (CRUD, review, statistics, import/export)
//! - Persistence backends (in-memory, JSON file)
//! - Change notifications, injectable clocks, configuration and errors

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod identity;
pub mod models;
pub mod schedule;
pub mod stats;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, OutputFormat};
pub use error::{Error, ErrorKind, Result};
pub use events::{ChangeEvent, ChangeKind};
pub use filter::CardFilter;
pub use models::{BoxLevel, CardPatch, CourseCount, Flashcard, NewCard, Stats, MAX_BOX, MIN_BOX};
pub use storage::{Backend, JsonFileBackend, MemoryBackend};
pub use store::{FlashcardStore, SharedStore};
