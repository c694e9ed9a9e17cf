// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Widget library for dashkit => See `dashkit` crate.
//!
//! Contains the windowed [tabs::TabManager] and the [button::MaterialButton]
//! used across the dashboard pages.

pub use dashkit_theme::palette::ButtonVariant;

/// Contains the [button::MaterialButton] widget and its ripples.
pub mod button;

/// Contains the built-in [icon::Icon] set.
pub mod icon;

/// Contains the [panel::Panel] container.
pub mod panel;

/// Contains the [tabs::TabManager] widget and associated structures.
pub mod tabs;
