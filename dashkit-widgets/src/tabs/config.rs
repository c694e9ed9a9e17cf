// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Tab manager configuration
//!
//! Every option has a default, so a config file only names what it changes:
//!
//! ```toml
//! orientation = "vertical"
//! indicator_style = "pill"
//! indicator_animation = "elastic"
//! max_visible = 4
//! indicator = "#10b981"
//! ```

use std::path::Path;
use std::time::Duration;

use dashkit_core::config::{load_file, parse_str, ConfigFormat, TimingConfig};
use dashkit_core::error::{DashError, DashResult};
use dashkit_theme::palette::{TabColors, ThemePalette};
use dashkit_theme::serde_color;
use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::tabs::indicator::{IndicatorAnimation, IndicatorStyle};
use crate::tabs::strip::StripParams;
use crate::tabs::style::{Orientation, TabAlign, TabSize, TabStyle};
use crate::tabs::transition::ContentAnimation;

/// Presentation and timing options of a [TabManager](crate::tabs::TabManager).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabManagerConfig {
    /// Strip direction.
    pub orientation: Orientation,
    /// Distribution of tabs along the strip.
    pub align: TabAlign,
    /// Label size.
    pub size: TabSize,
    /// Content change animation.
    pub content_animation: ContentAnimation,
    /// Indicator travel animation.
    pub indicator_animation: IndicatorAnimation,
    /// Tab decoration.
    pub tab_style: TabStyle,
    /// Indicator shape.
    pub indicator_style: IndicatorStyle,
    /// Whether tab icons are drawn.
    pub show_icons: bool,
    /// Maximum number of tabs shown at once.
    pub max_visible: usize,
    /// Active label color; the palette's when unset.
    #[serde(with = "serde_color::option", skip_serializing_if = "Option::is_none")]
    pub active_text: Option<Color>,
    /// Inactive label color; the palette's when unset.
    #[serde(with = "serde_color::option", skip_serializing_if = "Option::is_none")]
    pub inactive_text: Option<Color>,
    /// Indicator color; the palette's when unset.
    #[serde(with = "serde_color::option", skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Color>,
    /// Hovered label color; the palette's when unset.
    #[serde(with = "serde_color::option", skip_serializing_if = "Option::is_none")]
    pub hover: Option<Color>,
    /// Delay before the indicator re-measures after a change.
    pub settle_delay_ms: u64,
    /// Length of each half of a content transition.
    pub content_duration_ms: u64,
}

impl Default for TabManagerConfig {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            orientation: Orientation::default(),
            align: TabAlign::default(),
            size: TabSize::default(),
            content_animation: ContentAnimation::default(),
            indicator_animation: IndicatorAnimation::default(),
            tab_style: TabStyle::default(),
            indicator_style: IndicatorStyle::default(),
            show_icons: true,
            max_visible: 5,
            active_text: None,
            inactive_text: None,
            indicator: None,
            hover: None,
            settle_delay_ms: timing.settle_delay_ms,
            content_duration_ms: timing.content_duration_ms,
        }
    }
}

impl TabManagerConfig {
    /// Load from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> DashResult<Self> {
        let config: Self = load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> DashResult<Self> {
        let config: Self = parse_str(text, ConfigFormat::Toml, Path::new("<toml>"))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON text.
    pub fn from_json_str(text: &str) -> DashResult<Self> {
        let config: Self = parse_str(text, ConfigFormat::Json, Path::new("<json>"))?;
        config.validate()?;
        Ok(config)
    }

    /// Take the delays from application-wide timing settings.
    pub fn with_timing(mut self, timing: &TimingConfig) -> Self {
        self.settle_delay_ms = timing.settle_delay_ms;
        self.content_duration_ms = timing.content_duration_ms;
        self
    }

    /// Reject values no tab manager can be built with.
    pub fn validate(&self) -> DashResult<()> {
        if self.max_visible == 0 {
            return Err(DashError::invalid_config("max_visible must be at least 1"));
        }
        Ok(())
    }

    /// Label and indicator colors, falling back to the palette.
    pub fn colors(&self, palette: &ThemePalette) -> TabColors {
        let base = palette.tabs;
        TabColors {
            active_text: self.active_text.unwrap_or(base.active_text),
            inactive_text: self.inactive_text.unwrap_or(base.inactive_text),
            indicator: self.indicator.unwrap_or(base.indicator),
            hover: self.hover.unwrap_or(base.hover),
        }
    }

    /// The settings the strip layout depends on.
    pub fn strip_params(&self) -> StripParams {
        StripParams {
            orientation: self.orientation,
            align: self.align,
            size: self.size,
            style: self.tab_style,
            show_icons: self.show_icons,
        }
    }

    /// The indicator settle delay.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// The content transition half length.
    pub fn content_duration(&self) -> Duration {
        Duration::from_millis(self.content_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TabManagerConfig::default();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.indicator_style, IndicatorStyle::Line);
        assert_eq!(config.indicator_animation, IndicatorAnimation::Float);
        assert_eq!(config.content_animation, ContentAnimation::Slide);
        assert_eq!(config.max_visible, 5);
        assert!(config.show_icons);
        assert_eq!(config.settle_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_toml_overrides() {
        let config = TabManagerConfig::from_toml_str(
            r##"
            orientation = "vertical"
            align = "between"
            indicator_style = "pill"
            indicator_animation = "elastic"
            tab_style = "boxed"
            max_visible = 4
            indicator = "#10b981"
            "##,
        )
        .unwrap();

        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.align, TabAlign::Between);
        assert_eq!(config.indicator_style, IndicatorStyle::Pill);
        assert_eq!(config.tab_style, TabStyle::Boxed);
        assert_eq!(config.max_visible, 4);

        let colors = config.colors(&ThemePalette::light());
        assert_eq!(
            colors.indicator.components,
            Color::from_rgb8(0x10, 0xb9, 0x81).components
        );
        assert_eq!(
            colors.active_text.components,
            ThemePalette::light().tabs.active_text.components
        );
    }

    #[test]
    fn test_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"content_animation": "flip", "size": "lg", "show_icons": false}}"#
        )
        .unwrap();

        let config = TabManagerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.content_animation, ContentAnimation::Flip);
        assert_eq!(config.size, TabSize::Lg);
        assert!(!config.show_icons);
    }

    #[test]
    fn test_unknown_style_name_is_a_config_error() {
        let err = TabManagerConfig::from_json_str(r#"{"indicator_style": "glow"}"#).unwrap_err();
        assert!(matches!(err, DashError::Config { .. }));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = TabManagerConfig::from_toml_str("max_visible = 0").unwrap_err();
        assert!(matches!(err, DashError::InvalidConfig { .. }));
    }

    #[test]
    fn test_bad_hex_is_a_config_error() {
        let err = TabManagerConfig::from_toml_str("hover = \"#12\"").unwrap_err();
        assert!(matches!(err, DashError::Config { .. }));
    }
}
