// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Core library for dashkit => See `dashkit` crate.
//!
//! Contains the widget trait, input and update types, signals, the typed
//! event channel, deferred timers and configuration loading.

pub use vello as vg;

/// Contains [DashConfig](config::DashConfig) and file loading helpers.
pub mod config;

/// Contains easing curves and springs for widget animations.
pub mod easing;

/// Contains the error type shared by dashkit crates.
pub mod error;

/// Contains the typed publish/subscribe [EventChannel](events::EventChannel).
pub mod events;

/// Contains pointer input types delivered to widgets.
pub mod input;

/// Contains the layout node and taffy helpers.
pub mod layout;

/// Contains the signal system for reactive state.
pub mod signal;

/// Contains label shaping and glyph rendering.
pub mod text;

/// Contains the [DeferredQueue](timer::DeferredQueue) for delayed widget work.
pub mod timer;

/// Contains the [Update](update::Update) flags.
pub mod update;

/// Contains the core widget functionalities.
pub mod widget;
