//! Configuration file loading for the clickchess driver.
//!
//! Settings come from `clickchess.toml` in the current directory unless
//! another path is given. A missing file yields the defaults.

use clap::ValueEnum;
use clickchess_core::{parse_placement, PlacementError, Side, STARTING_PLACEMENT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start placement is malformed.
    #[error("Invalid start placement: {0}")]
    InvalidPlacement(#[from] PlacementError),
    /// The configured log level is not a known level name.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How events are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines and board diagrams.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Driver configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CliConfig {
    /// Placement text of the starting position.
    /// Defaults to the standard layout.
    #[serde(default = "default_start_placement")]
    pub start_placement: String,
    /// Side to move first. Defaults to white.
    #[serde(default = "default_side_to_move")]
    pub side_to_move: Side,
    /// Event output format. Defaults to text.
    #[serde(default)]
    pub output: OutputFormat,
    /// Maximum log level written to stderr. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_start_placement() -> String {
    STARTING_PLACEMENT.to_string()
}

fn default_side_to_move() -> Side {
    Side::White
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start_placement: default_start_placement(),
            side_to_move: default_side_to_move(),
            output: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("clickchess.toml")
    }

    /// Checks the values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlacement`] for malformed placement text
    /// and [`ConfigError::InvalidLogLevel`] for an unknown level name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_placement(&self.start_placement)?;
        self.level_filter()?;
        Ok(())
    }

    /// Parses the configured log level.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
