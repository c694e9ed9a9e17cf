// SPDX-License-Identifier: MIT OR Apache-2.0
//! Easing curves and a damped spring for widget animations.

use std::time::Duration;

/// A CSS-style cubic bezier timing function through `(0,0)`, `(x1,y1)`,
/// `(x2,y2)`, `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// `ease-in-out`: (0.42, 0, 0.58, 1).
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    /// Material "ease out quad": (0.25, 0.46, 0.45, 0.94).
    pub const EASE_OUT_QUAD: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

    /// Create a timing function. `x1` and `x2` must lie in `0..=1`.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn derivative(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Solve for the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::component(t, self.x1, self.x2) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let slope = Self::derivative(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // newton stalled; bisect
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..50 {
            let value = Self::component(t, self.x1, self.x2);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` (clamped to `0..=1`).
    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::component(self.solve_t(x), self.y1, self.y2)
    }
}

/// Linear progress of `elapsed` through `duration`, clamped to `0..=1`.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() || elapsed >= duration {
        1.0
    } else {
        elapsed.as_secs_f64() / duration.as_secs_f64()
    }
}

/// A repeating `0 → peak → 0` keyframe loop, each half eased in-out.
///
/// Returns the value at `elapsed` for a loop of length `period`.
pub fn oscillate(elapsed: Duration, period: Duration, peak: f64) -> f64 {
    if period.is_zero() {
        return 0.0;
    }
    let phase = (elapsed.as_secs_f64() % period.as_secs_f64()) / period.as_secs_f64();
    if phase < 0.5 {
        peak * CubicBezier::EASE_IN_OUT.ease(phase * 2.0)
    } else {
        peak * (1.0 - CubicBezier::EASE_IN_OUT.ease((phase - 0.5) * 2.0))
    }
}

/// Spring parameters: stiffness and absolute damping, unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
}

impl SpringParams {
    /// Create spring parameters.
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }

    /// Normalized step response: position at `t` seconds of a spring released
    /// from 0 toward 1 at rest.
    pub fn step_response(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let omega = self.stiffness.max(0.0).sqrt();
        if omega == 0.0 {
            return 1.0;
        }
        let zeta = self.damping / (2.0 * omega);
        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else {
            // critically/over-damped: treat as critical
            let envelope = (-omega * t).exp();
            1.0 - envelope * (1.0 + omega * t)
        }
    }

    /// Time after which the step response stays within 0.5 % of the target.
    pub fn settle_time(&self) -> Duration {
        let omega = self.stiffness.max(0.0).sqrt();
        if omega == 0.0 {
            return Duration::ZERO;
        }
        let decay = (self.damping / 2.0).min(omega).max(1e-3);
        Duration::from_secs_f64(5.3 / decay)
    }
}

/// Distance and velocity under which a spring snaps to its target.
const REST_THRESHOLD: f64 = 0.5;

/// Longest integration step; larger frame gaps are split.
const MAX_STEP: f64 = 1.0 / 120.0;

/// A one-dimensional damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring1D {
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring1D {
    /// A spring at rest at `value`.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Move the target; the value follows on [Spring1D::step].
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The target value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64, params: SpringParams) {
        if params.stiffness <= 0.0 {
            self.snap_to(self.target);
            return;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let displacement = self.value - self.target;
            let acceleration = -params.stiffness * displacement - params.damping * self.velocity;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if !self.is_animating() {
            self.snap_to(self.target);
        }
    }

    /// Whether the spring is still visibly moving.
    pub fn is_animating(&self) -> bool {
        (self.value - self.target).abs() >= REST_THRESHOLD || self.velocity.abs() >= REST_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints_and_symmetry() {
        let curve = CubicBezier::EASE_IN_OUT;
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert!((curve.ease(0.5) - 0.5).abs() < 1e-4);
        assert!(curve.ease(0.25) < 0.25);
        assert!(curve.ease(0.75) > 0.75);
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        let curve = CubicBezier::EASE_OUT_QUAD;
        assert!(curve.ease(0.3) > 0.3);
    }

    #[test]
    fn test_oscillate_peaks_mid_period() {
        let period = Duration::from_millis(1200);
        assert!(oscillate(Duration::ZERO, period, -5.0).abs() < 1e-9);
        assert!((oscillate(Duration::from_millis(600), period, -5.0) + 5.0).abs() < 1e-6);
        assert!(oscillate(Duration::from_millis(1200), period, -5.0).abs() < 1e-6);
    }

    #[test]
    fn test_spring_converges() {
        let params = SpringParams::new(300.0, 30.0);
        let mut spring = Spring1D::new(0.0);
        spring.set_target(100.0);
        for _ in 0..120 {
            spring.step(1.0 / 60.0, params);
        }
        assert_eq!(spring.value(), 100.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_underdamped_step_response_overshoots() {
        let params = SpringParams::new(700.0, 15.0);
        let peak = (1..200)
            .map(|i| params.step_response(i as f64 * 0.005))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
        assert!((params.step_response(5.0) - 1.0).abs() < 1e-3);
    }
}
