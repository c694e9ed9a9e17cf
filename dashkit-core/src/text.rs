// SPDX-License-Identifier: MIT OR Apache-2.0
//! Single-line label shaping and rendering.
//!
//! [ParleyText] shapes labels with parley against the system font collection
//! and draws the glyph runs into a vello [Scene]. Widgets use a shared
//! instance by default. [ApproxText] measures with fixed advances and draws
//! nothing, so layout tests do not depend on the installed fonts.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use parley::fontique::{Collection, CollectionOptions};
use parley::{Alignment, FontContext, Layout, LayoutContext, PositionedLayoutItem, StyleProperty};
use vello::kurbo::{Affine, Point, Size};
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

/// Line height, in em. Every label occupies a line box this tall.
pub const LINE_HEIGHT: f64 = 1.5;

/// Measures and draws label text.
pub trait TextRenderer {
    /// Size of the line box of `text` at `font_size` pixels.
    fn measure(&self, text: &str, font_size: f64) -> Size;

    /// Draw `text` with its line box's top-left corner at `origin`.
    fn draw(&self, scene: &mut Scene, text: &str, font_size: f64, color: Color, origin: Point);
}

struct Contexts {
    font_cx: FontContext,
    layout_cx: LayoutContext<[u8; 4]>,
}

/// Parley-backed text. Clones share the font collection and caches.
#[derive(Clone)]
pub struct ParleyText {
    contexts: Rc<RefCell<Contexts>>,
}

thread_local! {
    static SHARED: ParleyText = ParleyText::new();
}

impl ParleyText {
    /// A fresh context with the system fonts loaded.
    pub fn new() -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };

        Self {
            contexts: Rc::new(RefCell::new(Contexts {
                font_cx,
                layout_cx: LayoutContext::new(),
            })),
        }
    }

    /// The context shared by every widget on this thread.
    pub fn shared() -> Self {
        SHARED.with(Clone::clone)
    }

    fn shape(&self, text: &str, font_size: f64) -> Layout<[u8; 4]> {
        let mut contexts = self.contexts.borrow_mut();
        let Contexts { font_cx, layout_cx } = &mut *contexts;

        let mut builder = layout_cx.ranged_builder(font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(font_size as f32));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, Default::default());
        layout
    }
}

impl Default for ParleyText {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParleyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyText").finish_non_exhaustive()
    }
}

impl TextRenderer for ParleyText {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let height = font_size * LINE_HEIGHT;
        if text.is_empty() {
            return Size::new(0.0, height);
        }

        let layout = self.shape(text, font_size);
        let mut width = 0.0f32;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                for glyph in glyph_run.glyphs() {
                    width += glyph.advance;
                }
            }
        }

        Size::new(width as f64, height)
    }

    fn draw(&self, scene: &mut Scene, text: &str, font_size: f64, color: Color, origin: Point) {
        if text.is_empty() {
            return;
        }

        let layout = self.shape(text, font_size);
        let top = origin.y + (font_size * LINE_HEIGHT - layout.height() as f64) / 2.0;
        let transform = Affine::translate((origin.x, top));
        let brush = Brush::Solid(color);

        let mut runs = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let glyph_xform = run
                    .synthesis()
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                scene
                    .draw_glyphs(run.font())
                    .brush(&brush)
                    .hint(false)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(run.font_size())
                    .normalized_coords(run.normalized_coords())
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
                runs += 1;
            }
        }

        if runs == 0 {
            log::warn!("Could not render text '{}' - no suitable font available", text);
        }
    }
}

/// Fixed-advance metrics: every character advances `0.6 em` and a line is
/// `1.5 em` tall. Draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxText;

/// Average glyph advance, in em.
pub const APPROX_ADVANCE: f64 = 0.6;

impl TextRenderer for ApproxText {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * font_size * APPROX_ADVANCE, font_size * LINE_HEIGHT)
    }

    fn draw(&self, _scene: &mut Scene, _text: &str, _font_size: f64, _color: Color, _origin: Point) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_measure() {
        let size = ApproxText.measure("Home", 10.0);
        assert_eq!(size, Size::new(24.0, 15.0));
        assert_eq!(ApproxText.measure("", 16.0).width, 0.0);
    }

    #[test]
    fn test_parley_width_follows_glyphs() {
        let text = ParleyText::shared();
        let narrow = text.measure("iiii", 16.0);
        let wide = text.measure("WWWW", 16.0);

        assert!(wide.width > narrow.width);
        assert!(narrow.width > 0.0);
        assert_eq!(narrow.height, 24.0);
        assert_eq!(text.measure("", 16.0), Size::new(0.0, 24.0));
    }

    #[test]
    fn test_parley_draws_glyph_runs() {
        let mut scene = Scene::new();
        ParleyText::shared().draw(&mut scene, "Routers", 14.0, Color::BLACK, Point::new(4.0, 8.0));
        assert!(!scene.encoding().resources.glyph_runs.is_empty());

        let mut empty = Scene::new();
        ParleyText::shared().draw(&mut empty, "", 14.0, Color::BLACK, Point::ORIGIN);
        assert!(empty.encoding().is_empty());
    }
}
