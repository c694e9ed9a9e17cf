// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or configuring widgets.
///
/// Runtime interaction (clicks, scrolling, selection) never fails; these
/// errors only surface at construction, configuration and layout time.
#[derive(Error, Debug)]
pub enum DashError {
    /// Two tabs were given the same identifier.
    #[error("Duplicate tab id '{id}'")]
    DuplicateTab {
        /// The repeated id.
        id: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("Failed to parse config file {path:?}: {details}")]
    Config {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser output.
        details: String,
    },

    /// The layout engine rejected a tree.
    #[error("Layout error: {message}")]
    Layout {
        /// Layout engine output.
        message: String,
    },

    /// A color or theme value was rejected.
    #[error(transparent)]
    Theme(#[from] dashkit_theme::error::ThemeError),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dashkit operations.
pub type DashResult<T> = Result<T, DashError>;

impl DashError {
    /// Create a duplicate tab error.
    pub fn duplicate_tab(id: impl Into<String>) -> Self {
        Self::DuplicateTab { id: id.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a config parse error.
    pub fn config(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            details: details.into(),
        }
    }
}

impl From<taffy::TaffyError> for DashError {
    fn from(err: taffy::TaffyError) -> Self {
        Self::Layout {
            message: err.to_string(),
        }
    }
}
