//! Console configuration.
//!
//! Settings are plain structs with presets, optionally loaded from JSON.
//! Missing keys fall back to the defaults.

use crate::task::workflow::display::{format_timestamp, is_valid_timestamp_format};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board layout settings.
///
/// # Examples
///
/// ```
/// use corvee::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert!(config.show_rejected_lane);
///
/// let mine = BoardConfig::my_tasks();
/// assert!(!mine.show_rejected_lane);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Whether the Rejected lane is rendered.
    pub show_rejected_lane: bool,
    /// Whether lanes without tasks are dropped.
    pub hide_empty_lanes: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            show_rejected_lane: true,
            hide_empty_lanes: false,
        }
    }
}

impl BoardConfig {
    /// Layout for the assignee's own board, where rejected tasks have
    /// already left the viewer's hands.
    #[must_use]
    pub const fn my_tasks() -> Self {
        Self {
            show_rejected_lane: false,
            hide_empty_lanes: false,
        }
    }
}

/// Top-level console settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Layout of the event-wide and "assigned by me" boards.
    pub board: BoardConfig,
    /// Layout of the "my tasks" board.
    pub my_tasks_board: BoardConfig,
    /// `chrono` format used to display timestamps.
    pub timestamp_format: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            my_tasks_board: BoardConfig::my_tasks(),
            timestamp_format: "%Y-%m-%d %H:%M".to_owned(),
        }
    }
}

impl ConsoleConfig {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON
    /// or a key has the wrong type, and
    /// [`ConfigError::InvalidTimestampFormat`] when `timestamp_format` is
    /// not a valid `chrono` format string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if !is_valid_timestamp_format(&config.timestamp_format) {
            return Err(ConfigError::InvalidTimestampFormat(config.timestamp_format));
        }
        Ok(config)
    }

    /// Formats an API timestamp with the configured format.
    #[must_use]
    pub fn format_timestamp(&self, raw: &str) -> String {
        format_timestamp(raw, &self.timestamp_format)
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("invalid console configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The timestamp format contains an unknown specifier.
    #[error("invalid timestamp format: {0}")]
    InvalidTimestampFormat(String),
}
