// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::DashResult;
use crate::input::AppInfo;
use crate::layout::LayoutNode;
use crate::update::Update;
use dashkit_theme::id::WidgetId;
use dashkit_theme::palette::ThemePalette;
use vello::kurbo::Rect;
use vello::Scene;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// # Frame Lifecycle
///
/// 1. **Layout**: [`layout()`](Widget::layout) places the widget in the
///    offered bounds and returns the resulting [LayoutNode]. Widgets cache
///    whatever geometry they need from this pass; state that depends on
///    laid-out positions is derived here, never during input handling.
/// 2. **Update**: [`update()`](Widget::update) consumes pointer input and the
///    frame clock, fires due deferred work and reports what the host must do
///    next through [Update] flags.
/// 3. **Render**: [`render()`](Widget::render) draws into a vello [Scene].
///
/// A widget that returns [Update::LAYOUT] expects the host to run step 1
/// again before the next render.
pub trait Widget {
    /// Lay the widget out inside `bounds`.
    fn layout(&mut self, bounds: Rect) -> DashResult<LayoutNode>;

    /// Update the widget state with given info and layout.
    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update;

    /// Render the widget into the scene.
    fn render(
        &mut self,
        scene: &mut Scene,
        palette: &ThemePalette,
        layout: &LayoutNode,
        info: &AppInfo,
    );

    /// Return the widget id.
    fn widget_id(&self) -> WidgetId;
}
