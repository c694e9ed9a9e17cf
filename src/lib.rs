// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Dashboard widgets for Rust: a windowed tab manager with animated
//! indicators, ripple buttons and typed events between widgets.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use dashkit_core as core;
pub use dashkit_theme as theme;
pub use dashkit_widgets as widgets;

/// A "prelude" for users of the dashkit toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to put a tabbed dashboard page together.
///
/// ```rust
/// use dashkit::prelude::*;
///
/// let tabs = vec![
///     Tab::new("routers", "Routers", Panel::new()).with_icon(Icon::Home),
///     Tab::new("packages", "Packages", Panel::new()),
/// ];
/// let manager = TabManager::new(tabs, Some("packages"), TabManagerConfig::default()).unwrap();
/// assert_eq!(manager.active_tab_id(), Some("packages"));
/// ```
pub mod prelude {
    pub use crate::core::config::{DashConfig, TimingConfig};
    pub use crate::core::error::{DashError, DashResult};
    pub use crate::core::events::{DashboardEvent, EventChannel, Page, SubscriptionId};
    pub use crate::core::input::{AppInfo, ElementState, MouseButton};
    pub use crate::core::layout::LayoutNode;
    pub use crate::core::signal::{state::StateSignal, MaybeSignal, Signal};
    pub use crate::core::text::{ParleyText, TextRenderer};
    pub use crate::core::update::Update;
    pub use crate::core::widget::{BoxedWidget, Widget};

    // Theme
    pub use crate::theme::mode::ThemeMode;
    pub use crate::theme::palette::{ButtonVariant, ThemePalette};

    // Math
    pub use nalgebra::Vector2;

    // Color
    pub use crate::core::vg::peniko::Color;

    // Widgets
    pub use crate::widgets::button::{ButtonDesign, ButtonSize, IconPosition, MaterialButton};
    pub use crate::widgets::icon::Icon;
    pub use crate::widgets::panel::Panel;
    pub use crate::widgets::tabs::config::TabManagerConfig;
    pub use crate::widgets::tabs::indicator::{IndicatorAnimation, IndicatorStyle};
    pub use crate::widgets::tabs::style::{Orientation, TabAlign, TabSize, TabStyle};
    pub use crate::widgets::tabs::transition::ContentAnimation;
    pub use crate::widgets::tabs::{Tab, TabManager};
}
