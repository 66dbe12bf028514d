//! Rule configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use redemption_core::{GameRules, DEFAULT_OVERTIME_INCREMENT, DEFAULT_TARGET_SCORE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rule overrides as written in a config file.
///
/// Missing keys fall back to the standard 301 / +100 rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Starting target.
    #[serde(default = "default_target_score")]
    target_score: i32,

    /// Target increase per overtime round.
    #[serde(default = "default_overtime_increment")]
    overtime_increment: i32,
}

#[instrument]
fn default_target_score() -> i32 {
    DEFAULT_TARGET_SCORE
}

#[instrument]
fn default_overtime_increment() -> i32 {
    DEFAULT_OVERTIME_INCREMENT
}

impl RulesConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading rules from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read rules file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            target_score = config.target_score,
            overtime_increment = config.overtime_increment,
            "Rules loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse rules: {}", e)))
    }

    /// Loads `path` if given, otherwise returns the default rules.
    #[instrument]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validates the values and converts them into engine rules.
    #[instrument(skip(self))]
    pub fn rules(&self) -> Result<GameRules, ConfigError> {
        GameRules::new(self.target_score, self.overtime_increment)
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            target_score: default_target_score(),
            overtime_increment: default_overtime_increment(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = RulesConfig::from_toml("").expect("Empty config is valid");
        assert_eq!(config, RulesConfig::default());
        assert_eq!(*config.target_score(), 301);
    }

    #[test]
    fn test_partial_override() {
        let config = RulesConfig::from_toml("target_score = 501").expect("Valid config");
        assert_eq!(*config.target_score(), 501);
        assert_eq!(*config.overtime_increment(), 100);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = RulesConfig::from_toml("overtime_increment = 0").expect("Parses");
        let err = config.rules().unwrap_err();
        assert!(err.message.contains("overtime increment"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = RulesConfig::from_toml("target_score = \"lots\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse rules"));
    }
}
