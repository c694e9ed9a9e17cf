// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! # dashkit theming
//!
//! Palettes and color tokens shared by the dashkit widgets.
//!
//! - **[ThemePalette](palette::ThemePalette)**: surface, text and border colors
//!   for a light or dark dashboard
//! - **[TabColors](palette::TabColors)**: color tokens of the tab manager
//! - **[ButtonColors](palette::ButtonColors)**: per-[variant](palette::ButtonVariant)
//!   colors of the material button
//! - **[ThemeMode](mode::ThemeMode)**: light/dark selection, also from `DASHKIT_THEME`
//!
//! ```rust
//! use dashkit_theme::mode::ThemeMode;
//! use dashkit_theme::palette::{ButtonVariant, ThemePalette};
//!
//! let palette = ThemePalette::for_mode(ThemeMode::Dark);
//! let primary = palette.button(ButtonVariant::Primary);
//! assert_ne!(primary.background, primary.hover);
//! ```

pub use vello::peniko::Color;

/// Color helpers.
pub mod color;

/// Theme error types.
pub mod error;

/// Widget identifiers.
pub mod id;

/// Light/dark theme selection.
pub mod mode;

/// Palettes and widget color tokens.
pub mod palette;

/// Serde helpers for hex colors.
pub mod serde_color;
