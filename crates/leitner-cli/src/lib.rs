// Rust guideline compliant 2026-10-19

//! Leitner CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
pub mod terminal;

pub use context::{resolve_data_dir, DataDir, NotInitialized};
pub use output::{create_formatter, error_envelope, OutputFormatter};
pub use terminal::should_use_color;
