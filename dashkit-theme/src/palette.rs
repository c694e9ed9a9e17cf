// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::mode::ThemeMode;

/// Shared palette description for the dashboard.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    /// Which mode this palette belongs to.
    pub mode: ThemeMode,
    /// Page background.
    pub background: Color,
    /// Raised surfaces such as the tab content panel.
    pub surface: Color,
    /// Main text color.
    pub text: Color,
    /// Muted text used for secondary labels and chevrons.
    pub text_muted: Color,
    /// Border color for separators and outlines.
    pub border: Color,
    /// Tab manager tokens.
    pub tabs: TabColors,
    /// Fill color of button ripples.
    pub ripple: Color,
}

/// Color tokens of the tab manager.
#[derive(Debug, Clone, Copy)]
pub struct TabColors {
    /// Label color of the active tab.
    pub active_text: Color,
    /// Label color of inactive tabs.
    pub inactive_text: Color,
    /// Indicator fill.
    pub indicator: Color,
    /// Label color of a hovered inactive tab.
    pub hover: Color,
}

/// Visual variant of a material button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Blue call to action.
    #[default]
    Primary,
    /// Neutral gray.
    Secondary,
    /// Green confirmation.
    Success,
    /// Red destructive action.
    Danger,
    /// Yellow caution, dark text.
    Warning,
    /// Cyan informational.
    Info,
    /// Near-black.
    Dark,
    /// Light gray, dark text.
    Light,
}

/// Colors of one button variant.
#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    /// Idle background.
    pub background: Color,
    /// Background while hovered.
    pub hover: Color,
    /// Label and icon color.
    pub text: Color,
}

impl ButtonColors {
    const fn new(background: Color, hover: Color, text: Color) -> Self {
        Self {
            background,
            hover,
            text,
        }
    }
}

impl ThemePalette {
    /// Palette for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Standard light palette.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::from_rgb8(249, 250, 251),
            surface: Color::WHITE,
            text: Color::from_rgb8(31, 41, 55),
            text_muted: Color::from_rgb8(107, 114, 128),
            border: Color::from_rgb8(229, 231, 235),
            tabs: TabColors {
                active_text: Color::from_rgb8(37, 99, 235),
                inactive_text: Color::from_rgb8(75, 85, 99),
                indicator: Color::from_rgb8(59, 130, 246),
                hover: Color::from_rgb8(59, 130, 246),
            },
            ripple: Color::WHITE,
        }
    }

    /// Standard dark palette.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::from_rgb8(17, 24, 39),
            surface: Color::from_rgb8(31, 41, 55),
            text: Color::from_rgb8(229, 231, 235),
            text_muted: Color::from_rgb8(156, 163, 175),
            border: Color::from_rgb8(55, 65, 81),
            tabs: TabColors {
                active_text: Color::from_rgb8(96, 165, 250),
                inactive_text: Color::from_rgb8(156, 163, 175),
                indicator: Color::from_rgb8(96, 165, 250),
                hover: Color::from_rgb8(147, 197, 253),
            },
            ripple: Color::WHITE,
        }
    }

    /// Button colors for a variant. Variants keep their hue in both modes.
    pub fn button(&self, variant: ButtonVariant) -> ButtonColors {
        let white = Color::WHITE;
        match variant {
            ButtonVariant::Primary => ButtonColors::new(
                Color::from_rgb8(37, 99, 235),
                Color::from_rgb8(29, 78, 216),
                white,
            ),
            ButtonVariant::Secondary => ButtonColors::new(
                Color::from_rgb8(75, 85, 99),
                Color::from_rgb8(55, 65, 81),
                white,
            ),
            ButtonVariant::Success => ButtonColors::new(
                Color::from_rgb8(22, 163, 74),
                Color::from_rgb8(21, 128, 61),
                white,
            ),
            ButtonVariant::Danger => ButtonColors::new(
                Color::from_rgb8(220, 38, 38),
                Color::from_rgb8(185, 28, 28),
                white,
            ),
            ButtonVariant::Warning => ButtonColors::new(
                Color::from_rgb8(234, 179, 8),
                Color::from_rgb8(202, 138, 4),
                Color::BLACK,
            ),
            ButtonVariant::Info => ButtonColors::new(
                Color::from_rgb8(6, 182, 212),
                Color::from_rgb8(8, 145, 178),
                white,
            ),
            ButtonVariant::Dark => ButtonColors::new(
                Color::from_rgb8(31, 41, 55),
                Color::from_rgb8(17, 24, 39),
                white,
            ),
            ButtonVariant::Light => ButtonColors::new(
                Color::from_rgb8(229, 231, 235),
                Color::from_rgb8(209, 213, 219),
                Color::from_rgb8(31, 41, 55),
            ),
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_distinct_hover() {
        let palette = ThemePalette::light();
        let variants = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Success,
            ButtonVariant::Danger,
            ButtonVariant::Warning,
            ButtonVariant::Info,
            ButtonVariant::Dark,
            ButtonVariant::Light,
        ];
        for variant in variants {
            let colors = palette.button(variant);
            assert_ne!(colors.background.components, colors.hover.components);
        }
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(ThemePalette::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(ThemePalette::default().mode, ThemeMode::Light);
    }

    #[test]
    fn test_variant_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            variant: ButtonVariant,
        }
        let parsed: Wrapper = toml::from_str("variant = \"danger\"").unwrap();
        assert_eq!(parsed.variant, ButtonVariant::Danger);
    }
}
