// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Theme Error Types

use thiserror::Error;

/// Errors that can occur in the theming layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A theme name did not match any built-in mode.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The requested name.
        name: String,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason,
        }
    }

    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }
}
