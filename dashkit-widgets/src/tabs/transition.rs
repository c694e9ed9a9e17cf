// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tab content transitions.
//!
//! A transition runs in two halves: the outgoing content plays its exit
//! keyframe, then the incoming content plays its enter keyframe.

use std::time::{Duration, Instant};

use dashkit_core::easing::{progress, CubicBezier, SpringParams};
use serde::{Deserialize, Serialize};
use vello::kurbo::{Affine, Rect, Vec2};

use crate::tabs::window::Direction;

/// How tab content changes on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAnimation {
    /// Slide in the direction of travel.
    #[default]
    Slide,
    /// Cross-fade.
    Fade,
    /// Grow from 80 %.
    Scale,
    /// Turn about the vertical axis.
    Rotate,
    /// Flip about the horizontal axis.
    Flip,
    /// Slide with a springy settle.
    Bounce,
}

/// Spring of the bounce entrance.
pub const BOUNCE_SPRING: SpringParams = SpringParams::new(300.0, 15.0);

/// A pose of the content panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Horizontal offset as a fraction of the panel width.
    pub offset_x: f64,
    /// Opacity.
    pub opacity: f32,
    /// Uniform scale about the panel center.
    pub scale: f64,
    /// Rotation about the horizontal axis, degrees.
    pub rotate_x: f64,
    /// Rotation about the vertical axis, degrees.
    pub rotate_y: f64,
}

impl Keyframe {
    /// At rest and fully visible.
    pub const CENTER: Keyframe = Keyframe {
        offset_x: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    const HIDDEN: Keyframe = Keyframe {
        opacity: 0.0,
        ..Keyframe::CENTER
    };

    /// Interpolate toward `to`. `t` may leave `0..=1` for overshooting easings.
    pub fn lerp(self, to: Keyframe, t: f64) -> Keyframe {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Keyframe {
            offset_x: mix(self.offset_x, to.offset_x),
            opacity: mix(self.opacity as f64, to.opacity as f64).clamp(0.0, 1.0) as f32,
            scale: mix(self.scale, to.scale),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
        }
    }

    /// The 2-D transform of this pose for content laid out in `bounds`.
    ///
    /// Rotations flatten into a squash by `cos(angle)` along the rotated axis.
    pub fn transform(&self, bounds: Rect) -> Affine {
        let center = bounds.center().to_vec2();
        let squash_x = self.rotate_y.to_radians().cos() * self.scale;
        let squash_y = self.rotate_x.to_radians().cos() * self.scale;

        Affine::translate(Vec2::new(self.offset_x * bounds.width(), 0.0))
            * Affine::translate(center)
            * Affine::scale_non_uniform(squash_x, squash_y)
            * Affine::translate(-center)
    }
}

impl ContentAnimation {
    /// Pose the incoming content starts from.
    pub fn enter(self, direction: Direction) -> Keyframe {
        let forward = direction == Direction::Forward;
        match self {
            ContentAnimation::Slide | ContentAnimation::Bounce => Keyframe {
                offset_x: if forward { 1.0 } else { -1.0 },
                ..Keyframe::HIDDEN
            },
            ContentAnimation::Fade => Keyframe::HIDDEN,
            ContentAnimation::Scale => Keyframe {
                scale: 0.8,
                ..Keyframe::HIDDEN
            },
            ContentAnimation::Rotate => Keyframe {
                rotate_y: if forward { 90.0 } else { -90.0 },
                ..Keyframe::HIDDEN
            },
            ContentAnimation::Flip => Keyframe {
                rotate_x: 90.0,
                ..Keyframe::HIDDEN
            },
        }
    }

    /// Pose the outgoing content ends at.
    pub fn exit(self, direction: Direction) -> Keyframe {
        let backward = direction == Direction::Backward;
        match self {
            ContentAnimation::Slide | ContentAnimation::Bounce => Keyframe {
                offset_x: if backward { 1.0 } else { -1.0 },
                ..Keyframe::HIDDEN
            },
            ContentAnimation::Fade => Keyframe::HIDDEN,
            ContentAnimation::Scale => Keyframe {
                scale: 0.8,
                ..Keyframe::HIDDEN
            },
            ContentAnimation::Rotate => Keyframe {
                rotate_y: if backward { 90.0 } else { -90.0 },
                ..Keyframe::HIDDEN
            },
            ContentAnimation::Flip => Keyframe {
                rotate_x: -90.0,
                ..Keyframe::HIDDEN
            },
        }
    }

    /// Length of the entrance half.
    fn enter_duration(self, duration: Duration) -> Duration {
        match self {
            ContentAnimation::Bounce => BOUNCE_SPRING.settle_time().max(duration),
            ContentAnimation::Slide
            | ContentAnimation::Fade
            | ContentAnimation::Scale
            | ContentAnimation::Rotate
            | ContentAnimation::Flip => duration,
        }
    }

    /// Eased entrance progress after `elapsed`.
    fn enter_progress(self, elapsed: Duration, duration: Duration) -> f64 {
        match self {
            ContentAnimation::Bounce => BOUNCE_SPRING.step_response(elapsed.as_secs_f64()),
            ContentAnimation::Slide
            | ContentAnimation::Fade
            | ContentAnimation::Scale
            | ContentAnimation::Rotate
            | ContentAnimation::Flip => {
                CubicBezier::EASE_IN_OUT.ease(progress(elapsed, duration))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Exiting {
        outgoing: usize,
        from: Keyframe,
        started: Instant,
    },
    Entering { started: Instant },
}

/// Content transition between tabs, identified by tab index.
#[derive(Debug, Clone)]
pub struct ContentTransition {
    animation: ContentAnimation,
    duration: Duration,
    direction: Direction,
    incoming: Option<usize>,
    phase: Phase,
}

impl ContentTransition {
    /// A transition at rest showing `shown`.
    pub fn new(animation: ContentAnimation, duration: Duration, shown: Option<usize>) -> Self {
        Self {
            animation,
            duration,
            direction: Direction::Still,
            incoming: shown,
            phase: Phase::Idle,
        }
    }

    /// The configured animation.
    pub fn animation(&self) -> ContentAnimation {
        self.animation
    }

    /// Switch animation; applies from the next [ContentTransition::start].
    pub fn set_animation(&mut self, animation: ContentAnimation) {
        self.animation = animation;
    }

    /// Index of the content on screen right now.
    pub fn shown(&self) -> Option<usize> {
        match self.phase {
            Phase::Exiting { outgoing, .. } => Some(outgoing),
            Phase::Idle | Phase::Entering { .. } => self.incoming,
        }
    }

    /// Whether a transition is underway.
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Begin moving to `incoming`. Whatever is on screen exits first,
    /// starting from the pose it has at `now`.
    pub fn start(&mut self, incoming: usize, direction: Direction, now: Instant) {
        self.tick(now);
        let current = self.frame(now);
        self.incoming = Some(incoming);
        self.direction = direction;
        self.phase = match current {
            Some((outgoing, from)) if outgoing != incoming => Phase::Exiting {
                outgoing,
                from,
                started: now,
            },
            _ => Phase::Entering { started: now },
        };
        log::trace!("Content transition to {} started ({:?})", incoming, direction);
    }

    /// Advance phases. Returns whether another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Phase::Exiting { started, .. } = self.phase {
            let elapsed = now.saturating_duration_since(started);
            if elapsed >= self.duration {
                self.phase = Phase::Entering {
                    started: started + self.duration,
                };
            }
        }

        if let Phase::Entering { started } = self.phase {
            let elapsed = now.saturating_duration_since(started);
            if elapsed >= self.animation.enter_duration(self.duration) {
                self.phase = Phase::Idle;
            }
        }

        self.is_running()
    }

    /// The content to draw at `now` and its pose.
    pub fn frame(&self, now: Instant) -> Option<(usize, Keyframe)> {
        match self.phase {
            Phase::Idle => self.incoming.map(|index| (index, Keyframe::CENTER)),
            Phase::Exiting {
                outgoing,
                from,
                started,
            } => {
                let t = CubicBezier::EASE_IN_OUT
                    .ease(progress(now.saturating_duration_since(started), self.duration));
                let pose = from.lerp(self.animation.exit(self.direction), t);
                Some((outgoing, pose))
            }
            Phase::Entering { started } => {
                let elapsed = now.saturating_duration_since(started);
                let pose = if elapsed >= self.animation.enter_duration(self.duration) {
                    Keyframe::CENTER
                } else {
                    let t = self.animation.enter_progress(elapsed, self.duration);
                    self.animation.enter(self.direction).lerp(Keyframe::CENTER, t)
                };
                self.incoming.map(|index| (index, pose))
            }
        }
    }
}
