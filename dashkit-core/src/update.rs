// SPDX-License-Identifier: MIT OR Apache-2.0
use bitflags::bitflags;

bitflags! {
    /// What the host has to do after a widget update.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Update: u8 {
        /// Redraw the scene.
        const DRAW = 0b0000_0001;
        /// Run the layout pass again before the next draw.
        const LAYOUT = 0b0000_0010;
        /// Keep ticking: an animation or deferred task is pending.
        const ANIMATE = 0b0000_0100;
    }
}
