//! Engine configuration.

use crate::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What `select` does once the current round has a winner or is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecidedRoundPolicy {
    /// Fail with [`SelectError::RoundAlreadyDecided`](crate::SelectError::RoundAlreadyDecided)
    /// until `new_round` or `restart`.
    #[default]
    Reject,
    /// Keep applying moves; a line that is still complete is reported and
    /// scored again on every later move.
    Allow,
}

/// Configuration for a new [`Game`](crate::Game).
///
/// ```toml
/// starting_symbol = "cross"
/// decided_round_policy = "allow"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Symbol that moves first in the first round.
    #[serde(default = "default_starting_symbol")]
    starting_symbol: Symbol,

    /// Handling of moves after a round is decided.
    #[serde(default)]
    decided_round_policy: DecidedRoundPolicy,
}

fn default_starting_symbol() -> Symbol {
    Symbol::Circle
}

impl EngineConfig {
    /// Creates a configuration.
    pub fn new(starting_symbol: Symbol, decided_round_policy: DecidedRoundPolicy) -> Self {
        Self {
            starting_symbol,
            decided_round_policy,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            starting_symbol = %config.starting_symbol,
            policy = ?config.decided_round_policy,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_starting_symbol(), DecidedRoundPolicy::default())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
