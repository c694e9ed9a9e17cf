// SPDX-License-Identifier: MIT OR Apache-2.0
use std::time::Duration;

use dashkit_core::config::TimingConfig;
use dashkit_core::error::DashResult;
use dashkit_core::input::AppInfo;
use dashkit_core::layout::LayoutNode;
use dashkit_core::signal::MaybeSignal;
use dashkit_core::text::{ParleyText, TextRenderer};
use dashkit_core::update::Update;
use dashkit_core::widget::Widget;
use dashkit_theme::color::fade;
use dashkit_theme::id::WidgetId;
use dashkit_theme::palette::{ButtonVariant, ThemePalette};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use vello::kurbo::{Affine, Circle, Point, Rect, RoundedRect};
use vello::peniko::{Fill, Mix};
use vello::Scene;

use crate::icon::{paint_icon, Icon, ICON_GAP, ICON_SIZE};

/// Contains [RippleSet](ripple::RippleSet) and the ripple geometry.
pub mod ripple;

use ripple::RippleSet;

/// Opacity of a disabled button.
pub const DISABLED_OPACITY: f32 = 0.6;

/// Label size of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// 12px label.
    Sm,
    /// 14px label.
    #[default]
    Md,
    /// 16px label.
    Lg,
}

impl ButtonSize {
    /// Label font size in pixels.
    pub fn font_size(self) -> f64 {
        match self {
            ButtonSize::Sm => 12.0,
            ButtonSize::Md => 14.0,
            ButtonSize::Lg => 16.0,
        }
    }

    /// Padding as `(vertical, horizontal)` pixels.
    pub fn padding(self) -> (f64, f64) {
        match self {
            ButtonSize::Sm => (4.0, 8.0),
            ButtonSize::Md => (8.0, 16.0),
            ButtonSize::Lg => (12.0, 24.0),
        }
    }
}

/// Outline of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonDesign {
    /// Slightly rounded corners.
    #[default]
    Default,
    /// Rounded corners.
    Rounded,
    /// Fully rounded ends.
    Pill,
    /// A circle; the button is made square.
    Circle,
}

impl ButtonDesign {
    /// Corner radius for a button of the given height.
    pub fn corner_radius(self, height: f64) -> f64 {
        match self {
            ButtonDesign::Default => 4.0,
            ButtonDesign::Rounded => 8.0,
            ButtonDesign::Pill | ButtonDesign::Circle => height / 2.0,
        }
    }
}

/// Where the icon sits relative to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Before the label.
    #[default]
    Left,
    /// After the label.
    Right,
    /// Above the label.
    Top,
    /// Below the label.
    Bottom,
}

/// A button that spawns an expanding ripple at the press point.
///
/// The click handler runs on press. Ripples stay at half size while the
/// pointer is held and fade out after release.
pub struct MaterialButton {
    widget_id: WidgetId,
    label: String,
    icon: Option<Icon>,
    icon_position: IconPosition,
    variant: ButtonVariant,
    size: ButtonSize,
    design: ButtonDesign,
    full_width: bool,
    disabled: MaybeSignal<bool>,
    on_click: Option<Box<dyn FnMut() -> Update>>,
    text: Box<dyn TextRenderer>,
    ripples: RippleSet,
    bounds: Rect,
    hovered: bool,
    pending: Update,
}

impl MaterialButton {
    /// Create a primary button with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            widget_id: WidgetId::new("dashkit", "MaterialButton"),
            label: label.into(),
            icon: None,
            icon_position: IconPosition::default(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            design: ButtonDesign::default(),
            full_width: false,
            disabled: MaybeSignal::value(false),
            on_click: None,
            text: Box::new(ParleyText::shared()),
            ripples: RippleSet::new(TimingConfig::default().ripple_release()),
            bounds: Rect::ZERO,
            hovered: false,
            pending: Update::empty(),
        }
    }

    /// Set the color variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the outline.
    pub fn with_design(mut self, design: ButtonDesign) -> Self {
        self.design = design;
        self
    }

    /// Add an icon at the given position.
    pub fn with_icon(mut self, icon: Icon, position: IconPosition) -> Self {
        self.icon = Some(icon);
        self.icon_position = position;
        self
    }

    /// Stretch to the full width of the offered bounds.
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Disable the button, statically or through a signal.
    pub fn with_disabled(mut self, disabled: impl Into<MaybeSignal<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Run `on_click` on every accepted press.
    pub fn with_on_click(mut self, on_click: impl FnMut() -> Update + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// Use a different ripple fade length.
    pub fn with_ripple_fade(mut self, fade: Duration) -> Self {
        self.ripples = RippleSet::new(fade);
        self
    }

    /// Use a different text renderer for the label.
    pub fn with_text_renderer(mut self, text: impl TextRenderer + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    /// Whether presses are currently ignored.
    pub fn is_disabled(&self) -> bool {
        *self.disabled.get()
    }

    /// The box from the latest layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The live ripples.
    pub fn ripples(&self) -> &RippleSet {
        &self.ripples
    }

    /// Press at `(x, y)` relative to the button's top-left.
    ///
    /// Starts a held ripple and runs the click handler. Returns the ripple id,
    /// or [None] when the button is disabled.
    pub fn press(&mut self, x: f64, y: f64) -> Option<u64> {
        if self.is_disabled() {
            return None;
        }

        let size = Vector2::new(self.bounds.width(), self.bounds.height());
        let id = self.ripples.press(Vector2::new(x, y), size);
        log::debug!("Ripple {} pressed at ({:.1}, {:.1})", id, x, y);

        if let Some(on_click) = &mut self.on_click {
            self.pending |= on_click();
        }
        Some(id)
    }

    /// Release every held ripple; each fades out from `now`.
    pub fn release(&mut self, now: std::time::Instant) -> usize {
        let released = self.ripples.release(now);
        if released > 0 {
            log::debug!("Released {} ripples", released);
        }
        released
    }

    /// Pointer left the button; same as [MaterialButton::release].
    pub fn leave(&mut self, now: std::time::Instant) -> usize {
        self.release(now)
    }

    /// Drop every ripple immediately.
    pub fn clear_ripples(&mut self) {
        self.ripples.clear();
    }

    fn content_size(&self) -> (f64, f64) {
        let label = self.text.measure(&self.label, self.size.font_size());
        if self.icon.is_none() {
            return (label.width, label.height);
        }

        match self.icon_position {
            IconPosition::Left | IconPosition::Right => {
                (label.width + ICON_SIZE + ICON_GAP, label.height.max(ICON_SIZE))
            }
            IconPosition::Top | IconPosition::Bottom => {
                (label.width.max(ICON_SIZE), label.height + ICON_SIZE + ICON_GAP)
            }
        }
    }

    fn render_content(&self, scene: &mut Scene, color: vello::peniko::Color) {
        let font_size = self.size.font_size();
        let label = self.text.measure(&self.label, font_size);
        let (width, height) = self.content_size();
        let center = self.bounds.center();
        let origin = (center.x - width / 2.0, center.y - height / 2.0);

        let (icon_at, label_at) = match self.icon_position {
            IconPosition::Left => (
                (origin.0, center.y - ICON_SIZE / 2.0),
                (origin.0 + ICON_SIZE + ICON_GAP, center.y - label.height / 2.0),
            ),
            IconPosition::Right => (
                (origin.0 + label.width + ICON_GAP, center.y - ICON_SIZE / 2.0),
                (origin.0, center.y - label.height / 2.0),
            ),
            IconPosition::Top => (
                (center.x - ICON_SIZE / 2.0, origin.1),
                (center.x - label.width / 2.0, origin.1 + ICON_SIZE + ICON_GAP),
            ),
            IconPosition::Bottom => (
                (center.x - ICON_SIZE / 2.0, origin.1 + label.height + ICON_GAP),
                (center.x - label.width / 2.0, origin.1),
            ),
        };
        let label_at = if self.icon.is_some() {
            label_at
        } else {
            (center.x - label.width / 2.0, center.y - label.height / 2.0)
        };

        if let Some(icon) = self.icon {
            let rect = Rect::new(icon_at.0, icon_at.1, icon_at.0 + ICON_SIZE, icon_at.1 + ICON_SIZE);
            paint_icon(scene, icon, rect, color);
        }

        self.text.draw(
            scene,
            &self.label,
            font_size,
            color,
            Point::new(label_at.0, label_at.1),
        );
    }
}

impl Widget for MaterialButton {
    fn layout(&mut self, bounds: Rect) -> DashResult<LayoutNode> {
        let (pad_v, pad_h) = self.size.padding();
        let (content_w, content_h) = self.content_size();
        let mut width = content_w + pad_h * 2.0;
        let mut height = content_h + pad_v * 2.0;

        if self.design == ButtonDesign::Circle {
            let side = width.max(height);
            width = side;
            height = side;
        } else if self.full_width {
            width = bounds.width();
        }

        self.bounds = Rect::new(bounds.x0, bounds.y0, bounds.x0 + width, bounds.y0 + height);
        Ok(LayoutNode::leaf(self.bounds))
    }

    fn update(&mut self, _layout: &LayoutNode, info: &mut AppInfo) -> Update {
        let now = info.now;
        let mut update = std::mem::take(&mut self.pending);

        let hovered = info.cursor_in(self.bounds);
        if hovered != self.hovered {
            if !hovered {
                self.leave(now);
            }
            self.hovered = hovered;
            update |= Update::DRAW;
        }

        if hovered && info.left_pressed() {
            if let Some(cursor) = info.cursor_point() {
                if self
                    .press(cursor.x - self.bounds.x0, cursor.y - self.bounds.y0)
                    .is_some()
                {
                    update |= Update::DRAW | Update::ANIMATE;
                }
            }
            update |= std::mem::take(&mut self.pending);
        }

        if info.left_released() && self.release(now) > 0 {
            update |= Update::DRAW | Update::ANIMATE;
        }

        let had_ripples = !self.ripples.is_empty();
        if self.ripples.tick(now) {
            update |= Update::DRAW | Update::ANIMATE;
        } else if had_ripples {
            update |= Update::DRAW;
        }

        update
    }

    fn render(
        &mut self,
        scene: &mut Scene,
        palette: &ThemePalette,
        _layout: &LayoutNode,
        info: &AppInfo,
    ) {
        let disabled = self.is_disabled();
        let colors = palette.button(self.variant);
        let shape = RoundedRect::from_rect(
            self.bounds,
            self.design.corner_radius(self.bounds.height()),
        );
        let alpha = if disabled { DISABLED_OPACITY } else { 1.0 };
        let background = if self.hovered && !disabled {
            colors.hover
        } else {
            colors.background
        };

        scene.push_layer(Mix::Normal, alpha, Affine::IDENTITY, &shape);
        scene.fill(Fill::NonZero, Affine::IDENTITY, &background, None, &shape);

        for ripple in self.ripples.iter() {
            let (scale, opacity) = ripple.pose(info.now, self.ripples.fade());
            let center = (
                self.bounds.x0 + ripple.origin.x,
                self.bounds.y0 + ripple.origin.y,
            );
            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &fade(palette.ripple, opacity),
                None,
                &Circle::new(center, ripple.size / 2.0 * scale),
            );
        }

        self.render_content(scene, colors.text);
        scene.pop_layer();
    }

    fn widget_id(&self) -> WidgetId {
        self.widget_id.clone()
    }
}
