// Rust guideline compliant 2026-10-19

//! Command implementations for the Leitner CLI.

pub mod add;
pub mod clear;
pub mod courses;
pub mod delete;
pub mod due;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod review;
pub mod show;
pub mod stats;
pub mod update;
