//! File-based configuration.

use crate::settings::{MoveOrder, Settings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Contents of `tictactoe.toml`.
///
/// Every key is optional; a missing file yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Initial move-list order.
    move_order: MoveOrder,

    /// Highlight the cells of a winning line.
    highlight_winning_line: bool,

    /// Where log output is written while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            highlight_winning_line: true,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(move_order = ?config.move_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the move order (from the command line).
    pub fn with_move_order(mut self, move_order: Option<MoveOrder>) -> Self {
        if let Some(order) = move_order {
            self.move_order = order;
        }
        self
    }

    /// Overrides the log file (from the command line).
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Presentation settings derived from this config.
    pub fn settings(&self) -> Settings {
        Settings {
            move_order: self.move_order,
            highlight_winning_line: self.highlight_winning_line,
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
