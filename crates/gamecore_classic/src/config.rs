//! Match settings for the classic games.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a simulated match.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds in a Rock-Paper-Scissors match.
    #[serde(default = "default_rounds")]
    rounds: u32,

    /// Upper bound on moves in a Chutes and Ladders match.
    #[serde(default = "default_max_turns")]
    max_turns: u32,

    /// Seed for reproducible matches. A fresh seed is drawn per match if absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_rounds() -> u32 {
    5
}

fn default_max_turns() -> u32 {
    500
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            max_turns: default_max_turns(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Returns a copy of this config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy of this config with a different round count.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Returns a copy of this config with a different move cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(rounds = config.rounds, max_turns = config.max_turns, "Config loaded successfully");
        Ok(config)
    }

    /// Creates the random source for one match.
    pub(crate) fn match_rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        debug!(seed, "Seeding match");
        StdRng::seed_from_u64(seed)
    }
}

/// A match config or board layout that could not be used.
///
/// Records where in this crate the problem was detected.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid match setup: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong.
    pub message: String,
    /// Line that rejected the input.
    pub line: u32,
    /// Source file that rejected the input.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = MatchConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(*config.rounds(), 5);
        assert_eq!(*config.max_turns(), 500);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_document() {
        let config = MatchConfig::from_toml_str("rounds = 3\nseed = 42\n").unwrap();
        assert_eq!(*config.rounds(), 3);
        assert_eq!(*config.max_turns(), 500);
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_bad_document() {
        let err = MatchConfig::from_toml_str("rounds = \"many\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = MatchConfig::default().with_seed(7);
        let first: u64 = config.match_rng().random();
        let second: u64 = config.match_rng().random();
        assert_eq!(first, second);
    }
}
