// Rust guideline compliant 2026-10-19

//! Configuration management for Leitner.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the name is not json, table, or plain.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(Error::Config(format!(
                "output format must be json, table, or plain, got {}",
                value
            ))),
        }
    }
}

/// Configuration for Leitner behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File name of the card collection, relative to the data directory.
    #[serde(default = "default_cards_file")]
    pub cards_file: String,

    /// Minimum card text length enforced by front ends when adding cards.
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level used when none is given on the command line.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_cards_file() -> String {
    "cards.json".to_string()
}

fn default_min_text_length() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards_file: default_cards_file(),
            min_text_length: default_min_text_length(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/config.toml`
    /// 3. Environment variables with `LEITNER_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `LEITNER_CARDS_FILE` - Collection file name
    /// - `LEITNER_MIN_TEXT_LENGTH` - Minimum card text length
    /// - `LEITNER_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `LEITNER_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LEITNER_CARDS_FILE") {
            self.cards_file = val;
        }

        if let Ok(val) = std::env::var("LEITNER_MIN_TEXT_LENGTH") {
            self.min_text_length = val.parse().map_err(|_| {
                Error::Config("LEITNER_MIN_TEXT_LENGTH must be a non-negative number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("LEITNER_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val)?;
        }

        if let Ok(val) = std::env::var("LEITNER_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `cards_file` is blank
    /// - `log_level` is not a known level
    fn validate(&self) -> Result<()> {
        if self.cards_file.trim().is_empty() {
            return Err(Error::Config("cards_file cannot be empty".to_string()));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the path of the collection file inside `data_dir`.
    #[must_use]
    pub fn cards_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.cards_file)
    }

    /// Saves the configuration to `<data_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process environment must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("LEITNER_CARDS_FILE");
        std::env::remove_var("LEITNER_MIN_TEXT_LENGTH");
        std::env::remove_var("LEITNER_OUTPUT_FORMAT");
        std::env::remove_var("LEITNER_LOG_LEVEL");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cards_file, "cards.json");
        assert_eq!(config.min_text_length, 2);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
cards_file = "italian.json"
min_text_length = 3
output_format = "json"
log_level = "debug"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.cards_file, "italian.json");
        assert_eq!(config.min_text_length, 3);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.cards_path(temp_dir.path()),
            temp_dir.path().join("italian.json")
        );
    }

    #[test]
    fn test_config_validation_empty_cards_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "cards_file = \" \"").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_unknown_log_level() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = \"loud\"").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "min_text_length = 1").unwrap();

        std::env::set_var("LEITNER_MIN_TEXT_LENGTH", "4");
        std::env::set_var("LEITNER_OUTPUT_FORMAT", "plain");
        std::env::set_var("LEITNER_LOG_LEVEL", "INFO");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.min_text_length, 4);
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.log_level, "info");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("LEITNER_MIN_TEXT_LENGTH", "many");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("LEITNER_OUTPUT_FORMAT", "xml");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            cards_file: "deck.json".to_string(),
            min_text_length: 5,
            output_format: OutputFormat::Json,
            log_level: "trace".to_string(),
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
