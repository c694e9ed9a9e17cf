// SPDX-License-Identifier: MIT OR Apache-2.0
//! Press ripples.

use std::time::{Duration, Instant};

use dashkit_core::easing::{progress, CubicBezier};
use dashkit_core::timer::DeferredQueue;
use nalgebra::Vector2;

/// Scale of a ripple while the pointer is held.
pub const HELD_SCALE: f64 = 0.5;

/// Opacity of a ripple while the pointer is held.
pub const HELD_OPACITY: f32 = 0.35;

/// Extra reach added to the farthest-edge distance.
const REACH: f64 = 40.0;

/// Diameter of a ripple started at `(x, y)` inside a `width × height` control.
///
/// Always at least twice the larger side, so the full-scale ripple covers the
/// control from any origin.
pub fn ripple_diameter(x: f64, y: f64, width: f64, height: f64) -> f64 {
    let cover = 2.0 * width.max(height);
    let reach_x = 2.0 * x.max(width - x) + REACH;
    let reach_y = 2.0 * y.max(height - y) + REACH;
    cover.max(reach_x.max(reach_y))
}

/// One press ripple.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    /// Strictly increasing per button.
    pub id: u64,
    /// Center, relative to the control's top-left.
    pub origin: Vector2<f64>,
    /// Full-scale diameter.
    pub size: f64,
    /// Whether the pointer is still down.
    pub held: bool,
    /// When the pointer went up.
    pub released_at: Option<Instant>,
}

impl Ripple {
    /// Scale and opacity at `now`.
    ///
    /// Held ripples sit at half scale; released ones grow to full scale while
    /// fading out over `fade`.
    pub fn pose(&self, now: Instant, fade: Duration) -> (f64, f32) {
        match self.released_at {
            Some(released) if !self.held => {
                let t = CubicBezier::EASE_OUT_QUAD
                    .ease(progress(now.saturating_duration_since(released), fade));
                (
                    HELD_SCALE + (1.0 - HELD_SCALE) * t,
                    HELD_OPACITY * (1.0 - t as f32),
                )
            }
            _ => (HELD_SCALE, HELD_OPACITY),
        }
    }
}

/// The live ripples of one control.
#[derive(Debug, Clone)]
pub struct RippleSet {
    ripples: Vec<Ripple>,
    next_id: u64,
    fade: Duration,
    removals: DeferredQueue<u64>,
}

impl RippleSet {
    /// An empty set whose released ripples fade over `fade`.
    pub fn new(fade: Duration) -> Self {
        Self {
            ripples: Vec::new(),
            next_id: 0,
            fade,
            removals: DeferredQueue::new(),
        }
    }

    /// The fade-out length.
    pub fn fade(&self) -> Duration {
        self.fade
    }

    /// Start a held ripple at `origin` in a `size` control. Returns its id.
    pub fn press(&mut self, origin: Vector2<f64>, size: Vector2<f64>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ripples.push(Ripple {
            id,
            origin,
            size: ripple_diameter(origin.x, origin.y, size.x, size.y),
            held: true,
            released_at: None,
        });
        id
    }

    /// Release every held ripple at `now`. Returns how many were released.
    pub fn release(&mut self, now: Instant) -> usize {
        let mut released = 0;
        for ripple in self.ripples.iter_mut().filter(|r| r.held) {
            ripple.held = false;
            ripple.released_at = Some(now);
            self.removals.schedule(ripple.id, now, self.fade);
            released += 1;
        }
        released
    }

    /// Drop ripples whose fade has finished. Returns whether any remain.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.removals.take_due(now);
        if !expired.is_empty() {
            self.ripples.retain(|r| !expired.contains(&r.id));
            log::trace!("Removed {} faded ripples", expired.len());
        }
        !self.ripples.is_empty()
    }

    /// Discard everything immediately.
    pub fn clear(&mut self) {
        self.ripples.clear();
        self.removals.clear();
    }

    /// Live ripples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    /// Number of live ripples.
    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    /// Whether no ripple is live.
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Duration = Duration::from_millis(600);

    #[test]
    fn test_diameter_covers_control() {
        for (x, y) in [(0.0, 0.0), (60.0, 20.0), (120.0, 40.0), (7.5, 33.0)] {
            assert!(ripple_diameter(x, y, 120.0, 40.0) >= 240.0);
        }
        // corner press reaches the far corner
        assert_eq!(ripple_diameter(0.0, 0.0, 200.0, 20.0), 440.0);
        assert_eq!(ripple_diameter(10.0, 10.0, 20.0, 20.0), 60.0);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut set = RippleSet::new(FADE);
        let size = Vector2::new(100.0, 40.0);
        let a = set.press(Vector2::new(1.0, 1.0), size);
        let b = set.press(Vector2::new(2.0, 2.0), size);
        assert!(b > a);
    }

    #[test]
    fn test_release_removes_only_after_fade() {
        let t0 = Instant::now();
        let mut set = RippleSet::new(FADE);
        set.press(Vector2::new(50.0, 20.0), Vector2::new(100.0, 40.0));

        assert_eq!(set.release(t0), 1);
        assert!(set.tick(t0));
        assert!(set.tick(t0 + FADE - Duration::from_millis(1)));
        assert!(!set.tick(t0 + FADE));
        assert!(set.is_empty());
    }

    #[test]
    fn test_release_leaves_later_presses_alone() {
        let t0 = Instant::now();
        let mut set = RippleSet::new(FADE);
        let size = Vector2::new(100.0, 40.0);
        set.press(Vector2::new(10.0, 10.0), size);
        set.release(t0);
        let second = set.press(Vector2::new(20.0, 10.0), size);

        set.tick(t0 + FADE);
        let live: Vec<u64> = set.iter().map(|r| r.id).collect();
        assert_eq!(live, vec![second]);
        assert!(set.iter().all(|r| r.held));
    }

    #[test]
    fn test_pose_fades_out() {
        let t0 = Instant::now();
        let mut set = RippleSet::new(FADE);
        set.press(Vector2::new(10.0, 10.0), Vector2::new(100.0, 40.0));

        let held = set.iter().next().unwrap().pose(t0, FADE);
        assert_eq!(held, (HELD_SCALE, HELD_OPACITY));

        set.release(t0);
        let ripple = set.iter().next().unwrap();
        let (scale, opacity) = ripple.pose(t0 + FADE / 2, FADE);
        assert!(scale > HELD_SCALE && scale < 1.0);
        assert!(opacity < HELD_OPACITY && opacity > 0.0);
        assert_eq!(ripple.pose(t0 + FADE, FADE), (1.0, 0.0));
    }

    #[test]
    fn test_clear() {
        let mut set = RippleSet::new(FADE);
        set.press(Vector2::new(10.0, 10.0), Vector2::new(100.0, 40.0));
        set.release(Instant::now());
        set.clear();
        assert!(set.is_empty());
        assert!(!set.tick(Instant::now() + FADE));
    }
}
