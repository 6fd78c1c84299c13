// Rust guideline compliant 2026-10-19

//! Diagnostic logging setup for the CLI.

use leitner_core::{Error, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns `Config` if the name is not a known level.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::Config(format!("unknown log level: {}", other))),
    }
}

/// Installs the global stderr subscriber at `level`.
///
/// Stdout stays reserved for command output.
///
/// # Errors
///
/// Returns an error if `level` is not a known level.
pub fn init(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_is_case_insensitive() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        assert!(matches!(parse_log_level("loud"), Err(Error::Config(_))));
    }
}
