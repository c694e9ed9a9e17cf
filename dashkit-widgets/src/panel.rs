// SPDX-License-Identifier: MIT OR Apache-2.0
use dashkit_core::error::DashResult;
use dashkit_core::input::AppInfo;
use dashkit_core::layout::LayoutNode;
use dashkit_core::update::Update;
use dashkit_core::widget::{BoxedWidget, Widget};
use dashkit_theme::id::WidgetId;
use dashkit_theme::palette::ThemePalette;
use vello::kurbo::{Affine, Rect, RoundedRect};
use vello::peniko::{Color, Fill};
use vello::Scene;

/// A padded box with an optional background and at most one child.
///
/// Used as the body of tab content.
pub struct Panel {
    widget_id: WidgetId,
    background: Option<Color>,
    corner_radius: f64,
    padding: f64,
    child: Option<BoxedWidget>,
}

impl Panel {
    /// An empty, transparent panel.
    pub fn new() -> Self {
        Self {
            widget_id: WidgetId::new("dashkit", "Panel"),
            background: None,
            corner_radius: 0.0,
            padding: 0.0,
            child: None,
        }
    }

    /// Fill the panel with a color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Round the background corners.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Inset the child on every side.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the child widget.
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn layout(&mut self, bounds: Rect) -> DashResult<LayoutNode> {
        match &mut self.child {
            Some(child) => {
                let inner = bounds.inset(-self.padding);
                let inner = if inner.width() < 0.0 || inner.height() < 0.0 {
                    Rect::from_center_size(bounds.center(), (0.0, 0.0))
                } else {
                    inner
                };
                Ok(LayoutNode::with_children(bounds, vec![child.layout(inner)?]))
            }
            None => Ok(LayoutNode::leaf(bounds)),
        }
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update {
        match (&mut self.child, layout.children.first()) {
            (Some(child), Some(node)) => child.update(node, info),
            _ => Update::empty(),
        }
    }

    fn render(
        &mut self,
        scene: &mut Scene,
        palette: &ThemePalette,
        layout: &LayoutNode,
        info: &AppInfo,
    ) {
        if let Some(color) = self.background {
            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &color,
                None,
                &RoundedRect::from_rect(layout.bounds, self.corner_radius),
            );
        }

        if let (Some(child), Some(node)) = (&mut self.child, layout.children.first()) {
            child.render(scene, palette, node, info);
        }
    }

    fn widget_id(&self) -> WidgetId {
        self.widget_id.clone()
    }
}
