// SPDX-License-Identifier: MIT OR Apache-2.0
//! Active-tab indicator: geometry per style and the animated tracker that
//! chases it.

use std::time::{Duration, Instant};

use dashkit_core::easing::{oscillate, progress, CubicBezier, SpringParams, Spring1D};
use serde::{Deserialize, Serialize};
use vello::kurbo::{Rect, Vec2};

use crate::tabs::style::Orientation;

/// Shape of the active-tab indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStyle {
    /// Hidden.
    None,
    /// 2px line along the strip bottom.
    #[default]
    Line,
    /// Rounded translucent box behind the tab.
    Pill,
    /// Square translucent box behind the tab.
    Block,
    /// 3px line just below the strip edge.
    Underline,
    /// 4px bar; at the strip's leading edge when vertical.
    Bar,
}

/// How the indicator moves between tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorAnimation {
    /// Damped spring.
    Slide,
    /// Damped spring plus a gentle vertical bob.
    #[default]
    Float,
    /// Damped spring plus a gentle scale pulse.
    Pulse,
    /// Bouncy spring.
    Elastic,
    /// Stiff, bouncy spring.
    Bounce,
    /// Ease-in-out tween.
    Smooth,
}

/// How the indicator rectangle travels to a new target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Spring each edge toward the target.
    Spring(SpringParams),
    /// Ease-in-out from the old rectangle over the given time.
    Tween(Duration),
}

/// Period of the float and pulse idle loops.
pub const IDLE_PERIOD: Duration = Duration::from_millis(1200);

impl IndicatorAnimation {
    /// The travel motion.
    pub fn motion(self) -> Motion {
        match self {
            IndicatorAnimation::Slide | IndicatorAnimation::Float | IndicatorAnimation::Pulse => {
                Motion::Spring(SpringParams::new(300.0, 30.0))
            }
            IndicatorAnimation::Elastic => Motion::Spring(SpringParams::new(500.0, 15.0)),
            IndicatorAnimation::Bounce => Motion::Spring(SpringParams::new(700.0, 15.0)),
            IndicatorAnimation::Smooth => Motion::Tween(Duration::from_millis(400)),
        }
    }

    /// Idle motion at `elapsed` since the indicator appeared, as
    /// `(vertical offset, scale)`.
    pub fn idle(self, elapsed: Duration) -> (f64, f64) {
        match self {
            IndicatorAnimation::Float => (oscillate(elapsed, IDLE_PERIOD, -5.0), 1.0),
            IndicatorAnimation::Pulse => (0.0, 1.0 + oscillate(elapsed, IDLE_PERIOD, 0.05)),
            IndicatorAnimation::Slide
            | IndicatorAnimation::Elastic
            | IndicatorAnimation::Bounce
            | IndicatorAnimation::Smooth => (0.0, 1.0),
        }
    }

    /// Whether the idle motion never stops.
    pub fn loops(self) -> bool {
        matches!(self, IndicatorAnimation::Float | IndicatorAnimation::Pulse)
    }
}

/// Whether the indicator draws behind or above the tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorLayer {
    /// Under the label (filled boxes).
    Behind,
    /// Over the label (lines and bars).
    Above,
}

/// Where and how to draw the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    /// Absolute rectangle.
    pub rect: Rect,
    /// Corner radius.
    pub corner_radius: f64,
    /// Fill opacity, `0.0` when hidden.
    pub opacity: f32,
    /// Paint order relative to the label.
    pub layer: IndicatorLayer,
}

impl IndicatorGeometry {
    /// Derive the geometry for the active tab.
    ///
    /// `strip` is the laid-out tab list and `tab` the active tab's control.
    pub fn compute(
        style: IndicatorStyle,
        orientation: Orientation,
        strip: Rect,
        tab: Rect,
    ) -> Self {
        let pinned = |height: f64, bottom: f64| Rect::new(tab.x0, bottom - height, tab.x1, bottom);

        match style {
            IndicatorStyle::None => Self {
                rect: tab,
                corner_radius: 0.0,
                opacity: 0.0,
                layer: IndicatorLayer::Above,
            },
            IndicatorStyle::Line => Self::line(pinned(2.0, strip.y1)),
            IndicatorStyle::Underline => Self::line(pinned(3.0, strip.y1 + 1.0)),
            IndicatorStyle::Bar => match orientation {
                Orientation::Horizontal => Self::line(pinned(4.0, strip.y1)),
                Orientation::Vertical => {
                    Self::line(Rect::new(strip.x0, tab.y0, strip.x0 + 4.0, tab.y1))
                }
            },
            IndicatorStyle::Pill => Self {
                rect: tab,
                corner_radius: tab.width().min(tab.height()) / 2.0,
                opacity: 0.2,
                layer: IndicatorLayer::Behind,
            },
            IndicatorStyle::Block => Self {
                rect: tab,
                corner_radius: 0.0,
                opacity: 0.2,
                layer: IndicatorLayer::Behind,
            },
        }
    }

    fn line(rect: Rect) -> Self {
        Self {
            rect,
            corner_radius: 0.0,
            opacity: 1.0,
            layer: IndicatorLayer::Above,
        }
    }

    /// Whether anything would be drawn.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: Rect,
    started: Instant,
}

/// Animates the drawn indicator toward the latest measured geometry.
#[derive(Debug, Clone)]
pub struct IndicatorTracker {
    animation: IndicatorAnimation,
    target: Option<IndicatorGeometry>,
    edges: [Spring1D; 4],
    tween: Option<Tween>,
    last_tick: Option<Instant>,
    shown_at: Option<Instant>,
}

impl IndicatorTracker {
    /// An empty tracker; nothing draws until the first measurement.
    pub fn new(animation: IndicatorAnimation) -> Self {
        Self {
            animation,
            target: None,
            edges: [Spring1D::new(0.0); 4],
            tween: None,
            last_tick: None,
            shown_at: None,
        }
    }

    /// The configured animation.
    pub fn animation(&self) -> IndicatorAnimation {
        self.animation
    }

    /// Switch animation. Motion already underway continues with the new one.
    pub fn set_animation(&mut self, animation: IndicatorAnimation) {
        self.animation = animation;
    }

    /// The latest measured geometry.
    pub fn target(&self) -> Option<IndicatorGeometry> {
        self.target
    }

    /// Accept a new measurement. The first one snaps into place.
    pub fn measure(&mut self, geometry: IndicatorGeometry, now: Instant) {
        let rect = geometry.rect;
        if self.target.is_none() {
            log::trace!("Indicator placed at {:?}", rect);
            self.snap(rect);
            self.shown_at = Some(now);
        } else {
            log::trace!("Indicator moving to {:?}", rect);
            match self.animation.motion() {
                Motion::Spring(_) => {
                    self.tween = None;
                    for (edge, value) in self.edges.iter_mut().zip(rect_edges(rect)) {
                        edge.set_target(value);
                    }
                }
                Motion::Tween(_) => {
                    self.tween = Some(Tween {
                        from: self.rect_now(now),
                        started: now,
                    });
                    for (edge, value) in self.edges.iter_mut().zip(rect_edges(rect)) {
                        edge.snap_to(value);
                    }
                }
            }
        }
        self.target = Some(geometry);
        self.last_tick = Some(now);
    }

    fn snap(&mut self, rect: Rect) {
        for (edge, value) in self.edges.iter_mut().zip(rect_edges(rect)) {
            edge.snap_to(value);
        }
        self.tween = None;
    }

    /// Advance the springs to `now`. Returns whether another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        let mut moving = false;
        match self.animation.motion() {
            Motion::Spring(params) => {
                for edge in &mut self.edges {
                    edge.step(dt, params);
                    moving |= edge.is_animating();
                }
            }
            Motion::Tween(duration) => {
                if let Some(tween) = self.tween {
                    if now.saturating_duration_since(tween.started) >= duration {
                        self.tween = None;
                    } else {
                        moving = true;
                    }
                }
            }
        }

        moving || (target.is_visible() && self.animation.loops())
    }

    fn rect_now(&self, now: Instant) -> Rect {
        let settled = Rect::new(
            self.edges[0].value(),
            self.edges[1].value(),
            self.edges[2].value(),
            self.edges[3].value(),
        );
        match (self.tween, self.animation.motion()) {
            (Some(tween), Motion::Tween(duration)) => {
                let t = CubicBezier::EASE_IN_OUT
                    .ease(progress(now.saturating_duration_since(tween.started), duration));
                lerp_rect(tween.from, settled, t)
            }
            _ => settled,
        }
    }

    /// The geometry to draw at `now`, including idle motion.
    pub fn current(&self, now: Instant) -> Option<IndicatorGeometry> {
        let target = self.target?;
        let mut rect = self.rect_now(now);

        let elapsed = self
            .shown_at
            .map(|shown| now.saturating_duration_since(shown))
            .unwrap_or_default();
        let (dy, scale) = self.animation.idle(elapsed);
        if scale != 1.0 {
            let center = rect.center();
            let (half_w, half_h) = (rect.width() * scale / 2.0, rect.height() * scale / 2.0);
            rect = Rect::new(
                center.x - half_w,
                center.y - half_h,
                center.x + half_w,
                center.y + half_h,
            );
        }
        rect = rect + Vec2::new(0.0, dy);

        Some(IndicatorGeometry { rect, ..target })
    }
}

fn rect_edges(rect: Rect) -> [f64; 4] {
    [rect.x0, rect.y0, rect.x1, rect.y1]
}

fn lerp_rect(from: Rect, to: Rect, t: f64) -> Rect {
    let mix = |a: f64, b: f64| a + (b - a) * t;
    Rect::new(
        mix(from.x0, to.x0),
        mix(from.y0, to.y0),
        mix(from.x1, to.x1),
        mix(from.y1, to.y1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIP: Rect = Rect::new(0.0, 0.0, 400.0, 40.0);
    const TAB: Rect = Rect::new(100.0, 0.0, 180.0, 40.0);

    fn geometry(style: IndicatorStyle, orientation: Orientation) -> IndicatorGeometry {
        IndicatorGeometry::compute(style, orientation, STRIP, TAB)
    }

    #[test]
    fn test_line_pins_to_bottom() {
        let line = geometry(IndicatorStyle::Line, Orientation::Horizontal);
        assert_eq!(line.rect, Rect::new(100.0, 38.0, 180.0, 40.0));
        assert_eq!(line.opacity, 1.0);
        assert_eq!(line.layer, IndicatorLayer::Above);
    }

    #[test]
    fn test_underline_hangs_one_pixel_below() {
        let underline = geometry(IndicatorStyle::Underline, Orientation::Horizontal);
        assert_eq!(underline.rect, Rect::new(100.0, 38.0, 180.0, 41.0));
    }

    #[test]
    fn test_bar_per_orientation() {
        let horizontal = geometry(IndicatorStyle::Bar, Orientation::Horizontal);
        assert_eq!(horizontal.rect.height(), 4.0);
        assert_eq!(horizontal.rect.y1, 40.0);

        let strip = Rect::new(10.0, 0.0, 110.0, 300.0);
        let tab = Rect::new(10.0, 80.0, 110.0, 120.0);
        let vertical = IndicatorGeometry::compute(IndicatorStyle::Bar, Orientation::Vertical, strip, tab);
        assert_eq!(vertical.rect, Rect::new(10.0, 80.0, 14.0, 120.0));
    }

    #[test]
    fn test_line_keeps_bottom_pin_when_vertical() {
        let strip = Rect::new(0.0, 0.0, 100.0, 300.0);
        let tab = Rect::new(0.0, 40.0, 100.0, 80.0);
        let line = IndicatorGeometry::compute(IndicatorStyle::Line, Orientation::Vertical, strip, tab);
        assert_eq!(line.rect.y1, 300.0);
        assert_eq!(line.rect.width(), 100.0);
    }

    #[test]
    fn test_boxes_sit_behind_the_label() {
        let pill = geometry(IndicatorStyle::Pill, Orientation::Horizontal);
        assert_eq!(pill.rect, TAB);
        assert_eq!(pill.corner_radius, 20.0);
        assert_eq!(pill.opacity, 0.2);
        assert_eq!(pill.layer, IndicatorLayer::Behind);

        let block = geometry(IndicatorStyle::Block, Orientation::Horizontal);
        assert_eq!(block.corner_radius, 0.0);
        assert_eq!(block.layer, IndicatorLayer::Behind);
    }

    #[test]
    fn test_none_is_hidden() {
        assert!(!geometry(IndicatorStyle::None, Orientation::Horizontal).is_visible());
    }

    #[test]
    fn test_first_measure_snaps() {
        let t0 = Instant::now();
        let mut tracker = IndicatorTracker::new(IndicatorAnimation::Slide);
        assert!(tracker.current(t0).is_none());

        let line = geometry(IndicatorStyle::Line, Orientation::Horizontal);
        tracker.measure(line, t0);
        assert_eq!(tracker.current(t0).unwrap().rect, line.rect);
        assert!(!tracker.tick(t0 + Duration::from_millis(16)));
    }

    #[test]
    fn test_spring_travels_then_settles() {
        let t0 = Instant::now();
        let mut tracker = IndicatorTracker::new(IndicatorAnimation::Bounce);
        tracker.measure(geometry(IndicatorStyle::Line, Orientation::Horizontal), t0);

        let moved = IndicatorGeometry::compute(
            IndicatorStyle::Line,
            Orientation::Horizontal,
            STRIP,
            Rect::new(250.0, 0.0, 330.0, 40.0),
        );
        tracker.measure(moved, t0);

        let mut now = t0;
        assert!(tracker.tick(now + Duration::from_millis(16)));
        now += Duration::from_millis(16);
        let midway = tracker.current(now).unwrap().rect.x0;
        assert!(midway > 100.0 && midway < 250.0);

        for _ in 0..300 {
            now += Duration::from_millis(16);
            tracker.tick(now);
        }
        assert_eq!(tracker.current(now).unwrap().rect, moved.rect);
    }

    #[test]
    fn test_smooth_tween_finishes_on_time() {
        let t0 = Instant::now();
        let mut tracker = IndicatorTracker::new(IndicatorAnimation::Smooth);
        tracker.measure(geometry(IndicatorStyle::Block, Orientation::Horizontal), t0);

        let target = Rect::new(300.0, 0.0, 380.0, 40.0);
        tracker.measure(
            IndicatorGeometry::compute(IndicatorStyle::Block, Orientation::Horizontal, STRIP, target),
            t0,
        );

        let half = tracker.current(t0 + Duration::from_millis(200)).unwrap().rect;
        assert!((half.x0 - 200.0).abs() < 1.0);
        assert!(tracker.tick(t0 + Duration::from_millis(200)));
        assert!(!tracker.tick(t0 + Duration::from_millis(400)));
        assert_eq!(tracker.current(t0 + Duration::from_millis(400)).unwrap().rect, target);
    }

    #[test]
    fn test_float_bobs_and_keeps_animating() {
        let t0 = Instant::now();
        let mut tracker = IndicatorTracker::new(IndicatorAnimation::Float);
        tracker.measure(geometry(IndicatorStyle::Line, Orientation::Horizontal), t0);

        let top = tracker.current(t0 + Duration::from_millis(600)).unwrap().rect;
        assert!((top.y1 - 35.0).abs() < 1e-3);
        assert!(tracker.tick(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_pulse_scales_about_center() {
        let t0 = Instant::now();
        let mut tracker = IndicatorTracker::new(IndicatorAnimation::Pulse);
        tracker.measure(geometry(IndicatorStyle::Block, Orientation::Horizontal), t0);

        let peak = tracker.current(t0 + Duration::from_millis(600)).unwrap().rect;
        assert!((peak.width() - 84.0).abs() < 1e-3);
        assert!((peak.center() - TAB.center()).hypot() < 1e-6);
    }
}
