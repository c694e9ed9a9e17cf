// SPDX-License-Identifier: MIT OR Apache-2.0
use std::time::Instant;

use dashkit_core::error::DashResult;
use dashkit_core::input::AppInfo;
use dashkit_core::layout::LayoutNode;
use dashkit_core::signal::state::StateSignal;
use dashkit_core::signal::Signal;
use dashkit_core::text::{ParleyText, TextRenderer};
use dashkit_core::timer::DeferredQueue;
use dashkit_core::update::Update;
use dashkit_core::widget::{BoxedWidget, Widget};
use dashkit_theme::color::fade;
use dashkit_theme::id::WidgetId;
use dashkit_theme::palette::{TabColors, ThemePalette};
use vello::kurbo::{Affine, BezPath, Point, Rect, RoundedRect, Stroke};
use vello::peniko::{Color, Fill, Mix};
use vello::Scene;

use crate::icon::{paint_icon, Icon, ICON_GAP, ICON_SIZE};

/// Contains [TabManagerConfig](config::TabManagerConfig).
pub mod config;
/// Contains indicator geometry and animation.
pub mod indicator;
/// Contains the strip layout pass.
pub mod strip;
/// Contains tab presentation enums.
pub mod style;
/// Contains content transitions.
pub mod transition;
/// Contains the [TabWindow](window::TabWindow) model.
pub mod window;

use config::TabManagerConfig;
use indicator::{IndicatorAnimation, IndicatorGeometry, IndicatorLayer, IndicatorStyle, IndicatorTracker};
use strip::{layout_strip, StripItem, StripLayout};
use style::Orientation;
use transition::{ContentAnimation, ContentTransition};
use window::{Direction, TabWindow};

/// A single tab.
pub struct Tab {
    /// Unique identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Optional icon shown before the label.
    pub icon: Option<Icon>,
    /// Content shown while the tab is active.
    pub content: BoxedWidget,
}

impl Tab {
    /// Create a tab without an icon.
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: impl Widget + 'static) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            content: Box::new(content),
        }
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Part of the strip under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripTarget {
    /// A visible tab, by index in the tab set.
    Tab(usize),
    /// The scroll-left chevron.
    ScrollLeft,
    /// The scroll-right chevron.
    ScrollRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    MeasureIndicator,
}

/// A tab strip showing a sliding window of tabs, an animated indicator under
/// the active one and the active tab's content.
///
/// The indicator is derived from the latest layout pass. Any change that can
/// move it (selection, scrolling, style) schedules a re-measure one settle
/// delay later; [Widget::update] performs it once due.
pub struct TabManager {
    widget_id: WidgetId,
    tabs: Vec<Tab>,
    window: TabWindow,
    config: TabManagerConfig,
    active: StateSignal<Option<String>>,
    text: Box<dyn TextRenderer>,
    strip: StripLayout,
    indicator: IndicatorTracker,
    transition: ContentTransition,
    deferred: DeferredQueue<Deferred>,
    indicator_dirty: bool,
    pending_transition: Option<(usize, Direction)>,
    hovered: Option<StripTarget>,
}

impl TabManager {
    /// Create a tab manager.
    ///
    /// `default_active` picks the initial tab; an unknown id falls back to the
    /// first tab. Fails on duplicate tab ids or an invalid config.
    pub fn new(
        tabs: Vec<Tab>,
        default_active: Option<&str>,
        config: TabManagerConfig,
    ) -> DashResult<Self> {
        config.validate()?;
        let window = TabWindow::new(
            tabs.iter().map(|tab| tab.id.clone()),
            config.max_visible,
            default_active,
        )?;
        let active = StateSignal::new(window.active_id().map(str::to_owned));

        Ok(Self {
            widget_id: WidgetId::new("dashkit", "TabManager"),
            indicator: IndicatorTracker::new(config.indicator_animation),
            transition: ContentTransition::new(
                config.content_animation,
                config.content_duration(),
                window.active_index(),
            ),
            indicator_dirty: window.active_index().is_some(),
            tabs,
            window,
            config,
            active,
            text: Box::new(ParleyText::shared()),
            strip: StripLayout::default(),
            deferred: DeferredQueue::new(),
            pending_transition: None,
            hovered: None,
        })
    }

    /// Use a different text renderer for the labels.
    pub fn with_text_renderer(mut self, text: impl TextRenderer + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    /// Override the widget id.
    pub fn with_widget_id(mut self, widget_id: WidgetId) -> Self {
        self.widget_id = widget_id;
        self
    }

    /// The tabs, in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The window model.
    pub fn window(&self) -> &TabWindow {
        &self.window
    }

    /// The configuration.
    pub fn config(&self) -> &TabManagerConfig {
        &self.config
    }

    /// Id of the active tab.
    pub fn active_tab_id(&self) -> Option<&str> {
        self.window.active_id()
    }

    /// Direction of the last selection.
    pub fn direction(&self) -> Direction {
        self.window.direction()
    }

    /// A signal carrying the active tab id, updated on every tab change.
    pub fn active_signal(&self) -> StateSignal<Option<String>> {
        self.active.clone()
    }

    /// The strip from the latest layout pass.
    pub fn strip_layout(&self) -> &StripLayout {
        &self.strip
    }

    /// The latest measured indicator geometry.
    pub fn indicator_geometry(&self) -> Option<IndicatorGeometry> {
        self.indicator.target()
    }

    /// The indicator as drawn at `now`, mid-animation included.
    pub fn indicator_at(&self, now: Instant) -> Option<IndicatorGeometry> {
        self.indicator.current(now)
    }

    /// Whether an indicator re-measure is waiting.
    pub fn measure_pending(&self) -> bool {
        self.indicator_dirty || self.deferred.is_pending(&Deferred::MeasureIndicator)
    }

    /// Index of the content currently on screen.
    pub fn shown_content(&self) -> Option<usize> {
        self.transition.shown()
    }

    /// Make `id` the active tab.
    ///
    /// Unknown ids are ignored and return `false`. The window does not
    /// scroll to reveal the tab.
    pub fn select_tab(&mut self, id: &str) -> bool {
        let previous = self.window.active_index();
        if !self.window.select(id) {
            return false;
        }
        let Some(index) = self.window.active_index() else {
            return false;
        };

        log::debug!("Selected tab '{}' ({:?})", id, self.window.direction());
        self.indicator_dirty = true;
        if previous != Some(index) {
            self.pending_transition = Some((index, self.window.direction()));
            self.active.set(Some(id.to_owned()));
        }
        true
    }

    /// Scroll the window one tab toward the start.
    pub fn scroll_left(&mut self) -> bool {
        let moved = self.window.scroll_left();
        if moved {
            log::debug!("Scrolled tabs left to {}", self.window.start_index());
            self.indicator_dirty = true;
        }
        moved
    }

    /// Scroll the window one tab toward the end.
    pub fn scroll_right(&mut self) -> bool {
        let moved = self.window.scroll_right();
        if moved {
            log::debug!("Scrolled tabs right to {}", self.window.start_index());
            self.indicator_dirty = true;
        }
        moved
    }

    /// Change the indicator shape.
    pub fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.config.indicator_style = style;
        self.indicator_dirty = true;
    }

    /// Change the indicator motion.
    pub fn set_indicator_animation(&mut self, animation: IndicatorAnimation) {
        self.config.indicator_animation = animation;
        self.indicator.set_animation(animation);
        self.indicator_dirty = true;
    }

    /// Change the content transition.
    pub fn set_content_animation(&mut self, animation: ContentAnimation) {
        self.config.content_animation = animation;
        self.transition.set_animation(animation);
    }

    /// Derive the indicator from the latest layout pass.
    ///
    /// Returns [None] when there is no active tab or it is outside the
    /// visible window.
    pub fn compute_indicator_geometry(&self) -> Option<IndicatorGeometry> {
        let index = self.window.active_index()?;
        if !self.window.is_visible(index) {
            return None;
        }
        let tab = self.strip.tab_rect(index)?;
        Some(IndicatorGeometry::compute(
            self.config.indicator_style,
            self.config.orientation,
            self.strip.list,
            tab,
        ))
    }

    fn target_at(&self, point: Point) -> Option<StripTarget> {
        if self.strip.scroll_left.is_some_and(|rect| rect.contains(point)) {
            return Some(StripTarget::ScrollLeft);
        }
        if self.strip.scroll_right.is_some_and(|rect| rect.contains(point)) {
            return Some(StripTarget::ScrollRight);
        }
        self.strip.tab_at(point).map(StripTarget::Tab)
    }

    fn activate(&mut self, target: StripTarget) -> Update {
        match target {
            StripTarget::Tab(index) => {
                let Some(id) = self.window.id_at(index).map(str::to_owned) else {
                    return Update::empty();
                };
                if self.select_tab(&id) {
                    Update::DRAW | Update::ANIMATE
                } else {
                    Update::empty()
                }
            }
            StripTarget::ScrollLeft => {
                if self.scroll_left() {
                    Update::LAYOUT | Update::DRAW
                } else {
                    Update::empty()
                }
            }
            StripTarget::ScrollRight => {
                if self.scroll_right() {
                    Update::LAYOUT | Update::DRAW
                } else {
                    Update::empty()
                }
            }
        }
    }

    fn label_color(&self, colors: &TabColors, index: usize) -> Color {
        if self.window.active_index() == Some(index) {
            colors.active_text
        } else if self.hovered == Some(StripTarget::Tab(index)) {
            colors.hover
        } else {
            colors.inactive_text
        }
    }

    fn render_indicator(&self, scene: &mut Scene, geometry: &IndicatorGeometry, color: Color) {
        let shape = RoundedRect::from_rect(geometry.rect, geometry.corner_radius);
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &fade(color, geometry.opacity),
            None,
            &shape,
        );
    }

    fn render_tab(&self, scene: &mut Scene, colors: &TabColors, index: usize, rect: Rect) {
        let Some(tab) = self.tabs.get(index) else {
            return;
        };
        let active = self.window.active_index() == Some(index);
        let hovered = self.hovered == Some(StripTarget::Tab(index));
        let style = self.config.tab_style;

        if let Some(radius) = style.background_radius() {
            if active || hovered {
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    &fade(colors.hover, 0.1),
                    None,
                    &RoundedRect::from_rect(rect, radius),
                );
            }
        }
        if let Some(width) = style.border_width() {
            if active {
                scene.stroke(
                    &Stroke::new(width),
                    Affine::IDENTITY,
                    &colors.indicator,
                    None,
                    &rect.inset(-width / 2.0),
                );
            }
        }

        let color = self.label_color(colors, index);
        let font_size = self.config.size.font_size();
        let (_, pad_h) = self.config.size.padding();
        let center_y = rect.center().y;
        let mut x = rect.x0 + pad_h;

        if let (true, Some(icon)) = (self.config.show_icons, tab.icon) {
            let icon_rect = Rect::new(
                x,
                center_y - ICON_SIZE / 2.0,
                x + ICON_SIZE,
                center_y + ICON_SIZE / 2.0,
            );
            paint_icon(scene, icon, icon_rect, color);
            x += ICON_SIZE + ICON_GAP;
        }

        let label = self.text.measure(&tab.label, font_size);
        self.text.draw(
            scene,
            &tab.label,
            font_size,
            color,
            Point::new(x, center_y - label.height / 2.0),
        );
    }

    fn render_chevron(&self, scene: &mut Scene, palette: &ThemePalette, rect: Rect, target: StripTarget) {
        let color = if self.hovered == Some(target) {
            palette.text
        } else {
            palette.text_muted
        };
        let c = rect.center();
        let backward = target == StripTarget::ScrollLeft;
        let points = match (self.config.orientation, backward) {
            (Orientation::Horizontal, true) => [(c.x + 3.0, c.y - 6.0), (c.x - 3.0, c.y), (c.x + 3.0, c.y + 6.0)],
            (Orientation::Horizontal, false) => [(c.x - 3.0, c.y - 6.0), (c.x + 3.0, c.y), (c.x - 3.0, c.y + 6.0)],
            (Orientation::Vertical, true) => [(c.x - 6.0, c.y + 3.0), (c.x, c.y - 3.0), (c.x + 6.0, c.y + 3.0)],
            (Orientation::Vertical, false) => [(c.x - 6.0, c.y - 3.0), (c.x, c.y + 3.0), (c.x + 6.0, c.y - 3.0)],
        };

        let mut path = BezPath::new();
        path.move_to(points[0]);
        path.line_to(points[1]);
        path.line_to(points[2]);
        scene.stroke(&Stroke::new(2.0), Affine::IDENTITY, &color, None, &path);
    }
}

impl Widget for TabManager {
    fn layout(&mut self, bounds: Rect) -> DashResult<LayoutNode> {
        let items: Vec<StripItem<'_>> = self
            .window
            .visible_range()
            .filter_map(|index| {
                self.tabs.get(index).map(|tab| StripItem {
                    index,
                    label: &tab.label,
                    has_icon: tab.icon.is_some(),
                })
            })
            .collect();

        let strip = layout_strip(
            bounds,
            &self.config.strip_params(),
            &items,
            self.window.can_scroll_left(),
            self.window.can_scroll_right(),
            self.text.as_ref(),
        )?;
        self.strip = strip;

        let content = self.strip.content;
        let mut children = Vec::with_capacity(self.tabs.len());
        for tab in &mut self.tabs {
            children.push(tab.content.layout(content)?);
        }

        Ok(LayoutNode::with_children(bounds, children))
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update {
        let now = info.now;
        let mut update = Update::empty();

        let hovered = info.cursor_point().and_then(|point| self.target_at(point));
        if hovered != self.hovered {
            self.hovered = hovered;
            update |= Update::DRAW;
        }

        if info.left_pressed() {
            if let Some(target) = self.hovered {
                update |= self.activate(target);
            }
        }

        if let Some((index, direction)) = self.pending_transition.take() {
            self.transition.start(index, direction, now);
            update |= Update::DRAW | Update::ANIMATE;
        }

        if std::mem::take(&mut self.indicator_dirty) {
            self.deferred
                .reschedule(Deferred::MeasureIndicator, now, self.config.settle_delay());
        }

        for task in self.deferred.take_due(now) {
            match task {
                Deferred::MeasureIndicator => match self.compute_indicator_geometry() {
                    Some(geometry) => {
                        self.indicator.measure(geometry, now);
                        update |= Update::DRAW;
                    }
                    None => log::trace!("Active tab is not visible; indicator left in place"),
                },
            }
        }

        let indicator_moving = self.indicator.tick(now);
        let transition_running = self.transition.tick(now);
        if indicator_moving || transition_running {
            update |= Update::DRAW | Update::ANIMATE;
        }
        if !self.deferred.is_empty() {
            update |= Update::ANIMATE;
        }

        if let Some(index) = self.transition.shown() {
            if let (Some(tab), Some(node)) = (self.tabs.get_mut(index), layout.children.get(index)) {
                update |= tab.content.update(node, info);
            }
        }

        update
    }

    fn render(
        &mut self,
        scene: &mut Scene,
        palette: &ThemePalette,
        layout: &LayoutNode,
        info: &AppInfo,
    ) {
        let now = info.now;
        let colors = self.config.colors(palette);
        let indicator = self.indicator.current(now).filter(IndicatorGeometry::is_visible);

        if let Some(geometry) = indicator.filter(|g| g.layer == IndicatorLayer::Behind) {
            self.render_indicator(scene, &geometry, colors.indicator);
        }
        for (index, rect) in &self.strip.tabs {
            self.render_tab(scene, &colors, *index, *rect);
        }
        if let Some(geometry) = indicator.filter(|g| g.layer == IndicatorLayer::Above) {
            self.render_indicator(scene, &geometry, colors.indicator);
        }

        if let Some(rect) = self.strip.scroll_left {
            self.render_chevron(scene, palette, rect, StripTarget::ScrollLeft);
        }
        if let Some(rect) = self.strip.scroll_right {
            self.render_chevron(scene, palette, rect, StripTarget::ScrollRight);
        }

        let content = self.strip.content;
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &palette.surface,
            None,
            &RoundedRect::from_rect(content, 8.0),
        );

        let Some((index, pose)) = self.transition.frame(now) else {
            return;
        };
        let (Some(tab), Some(node)) = (self.tabs.get_mut(index), layout.children.get(index)) else {
            return;
        };

        let mut child = Scene::new();
        tab.content.render(&mut child, palette, node, info);
        scene.push_layer(Mix::Normal, pose.opacity, Affine::IDENTITY, &content);
        scene.append(&child, Some(pose.transform(content)));
        scene.pop_layer();
    }

    fn widget_id(&self) -> WidgetId {
        self.widget_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Panel;
    use dashkit_core::error::DashError;
    use dashkit_core::input::{ElementState, MouseButton};
    use dashkit_core::text::ApproxText;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 1000.0, 600.0);
    const SETTLE: Duration = Duration::from_millis(50);

    fn manager(count: usize, max_visible: usize) -> TabManager {
        let tabs = (0..count)
            .map(|i| Tab::new(format!("t{}", i), format!("Tab {}", i), Panel::new()))
            .collect();
        let config = TabManagerConfig {
            max_visible,
            indicator_animation: IndicatorAnimation::Slide,
            ..Default::default()
        };
        TabManager::new(tabs, None, config)
            .unwrap()
            .with_text_renderer(ApproxText)
    }

    fn frame(manager: &mut TabManager, info: AppInfo) -> (LayoutNode, Update) {
        let layout = manager.layout(BOUNDS).unwrap();
        let mut info = info;
        let update = manager.update(&layout, &mut info);
        (layout, update)
    }

    #[test]
    fn test_first_measure_waits_for_settle_delay() {
        let t0 = Instant::now();
        let mut tabs = manager(3, 5);

        let (_, update) = frame(&mut tabs, AppInfo::at(t0));
        assert!(tabs.indicator_geometry().is_none());
        assert!(update.contains(Update::ANIMATE));

        frame(&mut tabs, AppInfo::at(t0 + SETTLE - Duration::from_millis(1)));
        assert!(tabs.indicator_geometry().is_none());

        frame(&mut tabs, AppInfo::at(t0 + SETTLE));
        let geometry = tabs.indicator_geometry().unwrap();
        let tab = tabs.strip_layout().tab_rect(0).unwrap();
        assert_eq!(geometry.rect.x0, tab.x0);
        assert_eq!(geometry.rect.width(), tab.width());
        assert!(!tabs.measure_pending());
    }

    #[test]
    fn test_click_selects_and_moves_indicator() {
        let t0 = Instant::now();
        let mut tabs = manager(3, 5);
        frame(&mut tabs, AppInfo::at(t0));
        frame(&mut tabs, AppInfo::at(t0 + SETTLE));

        let target = tabs.strip_layout().tab_rect(2).unwrap();
        let t1 = t0 + Duration::from_millis(100);
        let press = AppInfo::at(t1)
            .with_cursor(target.center().x, target.center().y)
            .with_button(MouseButton::Left, ElementState::Pressed);
        let (_, update) = frame(&mut tabs, press);

        assert!(update.contains(Update::DRAW));
        assert_eq!(tabs.active_tab_id(), Some("t2"));
        assert_eq!(tabs.direction(), Direction::Forward);
        assert_eq!(*tabs.active_signal().get(), Some("t2".to_string()));
        assert!(tabs.measure_pending());

        frame(&mut tabs, AppInfo::at(t1 + SETTLE));
        assert_eq!(tabs.indicator_geometry().unwrap().rect.x0, target.x0);
    }

    #[test]
    fn test_reselect_reschedules_pending_measure() {
        let t0 = Instant::now();
        let mut tabs = manager(3, 5);
        frame(&mut tabs, AppInfo::at(t0));
        frame(&mut tabs, AppInfo::at(t0 + SETTLE));

        let t1 = t0 + Duration::from_millis(100);
        tabs.select_tab("t1");
        frame(&mut tabs, AppInfo::at(t1));
        tabs.select_tab("t2");
        frame(&mut tabs, AppInfo::at(t1 + Duration::from_millis(30)));

        frame(&mut tabs, AppInfo::at(t1 + SETTLE));
        let first = tabs.strip_layout().tab_rect(0).unwrap();
        assert_eq!(tabs.indicator_geometry().unwrap().rect.x0, first.x0);

        frame(&mut tabs, AppInfo::at(t1 + Duration::from_millis(80)));
        let third = tabs.strip_layout().tab_rect(2).unwrap();
        assert_eq!(tabs.indicator_geometry().unwrap().rect.x0, third.x0);
    }

    #[test]
    fn test_unknown_tab_keeps_geometry() {
        let t0 = Instant::now();
        let mut tabs = manager(3, 5);
        frame(&mut tabs, AppInfo::at(t0));
        frame(&mut tabs, AppInfo::at(t0 + SETTLE));
        let before = tabs.indicator_geometry();

        assert!(!tabs.select_tab("missing"));
        assert!(!tabs.measure_pending());
        assert_eq!(tabs.indicator_geometry(), before);
        assert_eq!(tabs.active_tab_id(), Some("t0"));
    }

    #[test]
    fn test_off_window_selection_leaves_indicator_stale() {
        let t0 = Instant::now();
        let mut tabs = manager(7, 3);
        frame(&mut tabs, AppInfo::at(t0));
        frame(&mut tabs, AppInfo::at(t0 + SETTLE));
        let before = tabs.indicator_geometry();

        assert!(tabs.select_tab("t6"));
        assert_eq!(tabs.window().start_index(), 0);
        assert!(tabs.compute_indicator_geometry().is_none());

        let t1 = t0 + Duration::from_millis(200);
        frame(&mut tabs, AppInfo::at(t1));
        frame(&mut tabs, AppInfo::at(t1 + SETTLE));
        assert_eq!(tabs.indicator_geometry(), before);
    }

    #[test]
    fn test_chevron_scrolls_and_requests_layout() {
        let t0 = Instant::now();
        let mut tabs = manager(7, 5);
        frame(&mut tabs, AppInfo::at(t0));
        assert!(tabs.strip_layout().scroll_left.is_none());

        let chevron = tabs.strip_layout().scroll_right.unwrap();
        let press = AppInfo::at(t0)
            .with_cursor(chevron.center().x, chevron.center().y)
            .with_button(MouseButton::Left, ElementState::Pressed);
        let (_, update) = frame(&mut tabs, press);

        assert!(update.contains(Update::LAYOUT));
        assert_eq!(tabs.window().start_index(), 1);

        frame(&mut tabs, AppInfo::at(t0));
        assert!(tabs.strip_layout().scroll_left.is_some());
        let visible: Vec<usize> = tabs.strip_layout().tabs.iter().map(|(i, _)| *i).collect();
        assert_eq!(visible, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_transition_switches_shown_content() {
        let t0 = Instant::now();
        let mut tabs = manager(3, 5);
        frame(&mut tabs, AppInfo::at(t0));

        tabs.select_tab("t1");
        frame(&mut tabs, AppInfo::at(t0));
        assert_eq!(tabs.shown_content(), Some(0));

        frame(&mut tabs, AppInfo::at(t0 + Duration::from_millis(310)));
        assert_eq!(tabs.shown_content(), Some(1));

        let (_, update) = frame(&mut tabs, AppInfo::at(t0 + Duration::from_millis(700)));
        assert!(!update.contains(Update::ANIMATE));
    }

    #[test]
    fn test_active_signal_notifies_once_per_change() {
        let tabs_seen = Rc::new(RefCell::new(Vec::new()));
        let mut tabs = manager(3, 5);
        let sink = tabs_seen.clone();
        tabs.active_signal()
            .listen(Box::new(move |id| sink.borrow_mut().push(id.clone())));

        tabs.select_tab("t1");
        tabs.select_tab("t1");
        tabs.select_tab("t0");
        assert_eq!(
            *tabs_seen.borrow(),
            vec![Some("t1".to_string()), Some("t0".to_string())]
        );
    }

    #[test]
    fn test_empty_tab_set() {
        let t0 = Instant::now();
        let mut tabs = TabManager::new(Vec::new(), None, TabManagerConfig::default()).unwrap();
        let (_, update) = frame(&mut tabs, AppInfo::at(t0 + SETTLE));

        assert_eq!(tabs.active_tab_id(), None);
        assert!(tabs.compute_indicator_geometry().is_none());
        assert!(tabs.strip_layout().scroll_left.is_none());
        assert!(tabs.strip_layout().scroll_right.is_none());
        assert!(!update.contains(Update::ANIMATE));

        let mut scene = Scene::new();
        let layout = tabs.layout(BOUNDS).unwrap();
        tabs.render(&mut scene, &ThemePalette::default(), &layout, &AppInfo::at(t0));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let tabs = vec![
            Tab::new("a", "A", Panel::new()),
            Tab::new("a", "Again", Panel::new()),
        ];
        assert!(matches!(
            TabManager::new(tabs, None, TabManagerConfig::default()),
            Err(DashError::DuplicateTab { .. })
        ));
    }

    #[test]
    fn test_render_draws() {
        let t0 = Instant::now();
        let mut tabs = manager(3, 5);
        frame(&mut tabs, AppInfo::at(t0));
        let (layout, _) = frame(&mut tabs, AppInfo::at(t0 + SETTLE));

        let mut scene = Scene::new();
        tabs.render(&mut scene, &ThemePalette::dark(), &layout, &AppInfo::at(t0 + SETTLE));
        assert!(!scene.encoding().is_empty());
    }

    #[test]
    fn test_labels_are_shaped_and_drawn_as_glyphs() {
        let t0 = Instant::now();
        let tabs = vec![
            Tab::new("narrow", "iiii", Panel::new()),
            Tab::new("wide", "WWWW", Panel::new()),
        ];
        let mut tabs = TabManager::new(tabs, None, TabManagerConfig::default()).unwrap();
        let (layout, _) = frame(&mut tabs, AppInfo::at(t0));

        let narrow = tabs.strip_layout().tab_rect(0).unwrap();
        let wide = tabs.strip_layout().tab_rect(1).unwrap();
        assert!(wide.width() > narrow.width());

        let mut scene = Scene::new();
        tabs.render(&mut scene, &ThemePalette::light(), &layout, &AppInfo::at(t0));
        assert!(scene.encoding().resources.glyph_runs.len() >= 2);
    }
}
