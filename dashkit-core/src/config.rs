// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Configuration
//!
//! Widget and application settings load from TOML or JSON files; the format
//! is picked from the file extension.
//!
//! ```toml
//! theme = "dark"
//!
//! [timing]
//! settle_delay_ms = 50
//! content_duration_ms = 300
//! ripple_release_ms = 600
//! ```
//!
//! `DASHKIT_THEME` overrides the theme of [DashConfig::from_env_or_default].

use std::fs;
use std::path::Path;
use std::time::Duration;

use dashkit_theme::mode::ThemeMode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> DashResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            _ => Err(DashError::config(
                path,
                "unsupported extension (expected .toml or .json)",
            )),
        }
    }
}

/// Parse configuration text in the given format. `origin` names the source in errors.
pub fn parse_str<T: DeserializeOwned>(
    text: &str,
    format: ConfigFormat,
    origin: &Path,
) -> DashResult<T> {
    match format {
        ConfigFormat::Toml => {
            toml::from_str(text).map_err(|err| DashError::config(origin, err.to_string()))
        }
        ConfigFormat::Json => {
            serde_json::from_str(text).map_err(|err| DashError::config(origin, err.to_string()))
        }
    }
}

/// Read and parse a TOML or JSON file.
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> DashResult<T> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    log::debug!("Loading {:?} config from {:?}", format, path);
    parse_str(&text, format, path)
}

/// Delays used by widget animations and deferred work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between a layout-moving change and the indicator re-measure.
    pub settle_delay_ms: u64,
    /// Length of each half (exit, enter) of a tab content transition.
    pub content_duration_ms: u64,
    /// Fade-out length of a released ripple.
    pub ripple_release_ms: u64,
}

impl TimingConfig {
    /// The indicator settle delay.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// The content transition half length.
    pub fn content_duration(&self) -> Duration {
        Duration::from_millis(self.content_duration_ms)
    }

    /// The ripple release length.
    pub fn ripple_release(&self) -> Duration {
        Duration::from_millis(self.ripple_release_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50,
            content_duration_ms: 300,
            ripple_release_ms: 600,
        }
    }
}

/// Application-wide dashkit settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Light or dark palette.
    pub theme: ThemeMode,
    /// Animation timings.
    pub timing: TimingConfig,
}

impl DashConfig {
    /// Load from a TOML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> DashResult<Self> {
        load_file(path)
    }

    /// Defaults, with the theme taken from `DASHKIT_THEME` when set.
    pub fn from_env_or_default() -> Self {
        Self {
            theme: ThemeMode::from_env_or_default(),
            ..Default::default()
        }
    }
}
