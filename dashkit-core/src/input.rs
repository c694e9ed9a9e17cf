// SPDX-License-Identifier: MIT OR Apache-2.0
use std::time::Instant;

use nalgebra::Vector2;
use vello::kurbo::{Point, Rect};

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

/// Pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    /// The button went down.
    Pressed,
    /// The button went up.
    Released,
}

/// Input and clock information for one update pass.
#[derive(Debug, Clone)]
pub struct AppInfo {
    /// Cursor position in window coordinates; [None] when outside the window.
    pub cursor_pos: Option<Vector2<f64>>,
    /// Button transitions since the last update, in arrival order.
    pub buttons: Vec<(MouseButton, ElementState)>,
    /// The frame clock.
    pub now: Instant,
}

impl AppInfo {
    /// Empty input at the given instant.
    pub fn at(now: Instant) -> Self {
        Self {
            cursor_pos: None,
            buttons: Vec::new(),
            now,
        }
    }

    /// Set the cursor position and return self.
    pub fn with_cursor(mut self, x: f64, y: f64) -> Self {
        self.cursor_pos = Some(Vector2::new(x, y));
        self
    }

    /// Append a button transition and return self.
    pub fn with_button(mut self, button: MouseButton, state: ElementState) -> Self {
        self.buttons.push((button, state));
        self
    }

    /// The cursor position as a kurbo point.
    pub fn cursor_point(&self) -> Option<Point> {
        self.cursor_pos.map(|pos| Point::new(pos.x, pos.y))
    }

    /// Whether the cursor is inside `rect`.
    pub fn cursor_in(&self, rect: Rect) -> bool {
        self.cursor_point().is_some_and(|p| rect.contains(p))
    }

    /// Whether the left button went down during this pass.
    pub fn left_pressed(&self) -> bool {
        self.buttons
            .iter()
            .any(|(b, s)| *b == MouseButton::Left && *s == ElementState::Pressed)
    }

    /// Whether the left button went up during this pass.
    pub fn left_released(&self) -> bool {
        self.buttons
            .iter()
            .any(|(b, s)| *b == MouseButton::Left && *s == ElementState::Released)
    }
}
