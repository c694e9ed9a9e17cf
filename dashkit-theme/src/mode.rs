// SPDX-License-Identifier: MIT OR Apache-2.0
use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Environment variable consulted by [ThemeMode::from_env_or_default].
pub const THEME_ENV: &str = "DASHKIT_THEME";

/// Light or dark dashboard appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light surfaces, dark text.
    #[default]
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl ThemeMode {
    /// Read the mode from `DASHKIT_THEME`, falling back to [ThemeMode::Light].
    pub fn from_env_or_default() -> Self {
        match env::var(THEME_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                log::warn!("{}; using light theme", err);
                ThemeMode::Light
            }),
            Err(_) => ThemeMode::default(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::not_found(s)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}
