//! Configuration system for the N-Queens benchmark.
//!
//! Load benchmark configuration from TOML or YAML files to control board
//! size, trial count, seeding and the min-conflicts iteration limit without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use nqueens_config::NQueensConfig;
//!
//! let config = NQueensConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [board]
//!     size = 8
//!
//!     [benchmark]
//!     trial_count = 50
//!
//!     [min_conflicts]
//!     iteration_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.board.size, 8);
//! assert_eq!(config.benchmark.trial_count, 50);
//! assert_eq!(config.min_conflicts.iteration_limit, 500);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use nqueens_config::NQueensConfig;
//!
//! let config = NQueensConfig::load("nqueens.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 17;

/// Default number of benchmark trials.
pub const DEFAULT_TRIAL_COUNT: usize = 200;

/// Default min-conflicts iteration limit.
pub const DEFAULT_ITERATION_LIMIT: u64 = 1000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NQueensConfig {
    /// Random seed for reproducible results. Seeded from OS entropy if absent.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Board configuration.
    #[serde(default)]
    pub board: BoardConfig,

    /// Trial harness configuration.
    #[serde(default)]
    pub benchmark: TrialConfig,

    /// Min-conflicts search configuration.
    #[serde(default)]
    pub min_conflicts: MinConflictsConfig,
}

impl NQueensConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board.size = size;
        self
    }

    /// Sets the number of trials.
    pub fn with_trial_count(mut self, count: usize) -> Self {
        self.benchmark.trial_count = count;
        self
    }

    /// Sets the min-conflicts iteration limit.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.min_conflicts.iteration_limit = limit;
        self
    }

    /// Checks that every size, count and limit is non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_config::NQueensConfig;
    ///
    /// assert!(NQueensConfig::new().validate().is_ok());
    /// assert!(NQueensConfig::new().with_board_size(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.size == 0 {
            return Err(ConfigError::Invalid("board.size must be at least 1".into()));
        }
        if self.benchmark.trial_count == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.trial_count must be at least 1".into(),
            ));
        }
        if self.min_conflicts.iteration_limit == 0 {
            return Err(ConfigError::Invalid(
                "min_conflicts.iteration_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BoardConfig {
    /// Board side length, also the number of queens.
    #[serde(default = "default_board_size")]
    pub size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}

/// Trial harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TrialConfig {
    /// Number of randomized trials per algorithm.
    #[serde(default = "default_trial_count")]
    pub trial_count: usize,

    /// Optional path for the per-trial CSV export.
    #[serde(default)]
    pub csv_output: Option<String>,

    /// Optional path for the Markdown report.
    #[serde(default)]
    pub markdown_output: Option<String>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            csv_output: None,
            markdown_output: None,
        }
    }
}

/// Min-conflicts search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MinConflictsConfig {
    /// Maximum iterations before the search gives up.
    #[serde(default = "default_iteration_limit")]
    pub iteration_limit: u64,
}

impl Default for MinConflictsConfig {
    fn default() -> Self {
        Self {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_trial_count() -> usize {
    DEFAULT_TRIAL_COUNT
}

fn default_iteration_limit() -> u64 {
    DEFAULT_ITERATION_LIMIT
}
