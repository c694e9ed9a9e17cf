// SPDX-License-Identifier: MIT OR Apache-2.0
//! Outline icons drawn as vector paths on a 24-unit grid.

use serde::{Deserialize, Serialize};
use vello::kurbo::{Affine, BezPath, Circle, Line, Rect, RoundedRect, Shape, Stroke};
use vello::peniko::Color;
use vello::Scene;

/// Side length of an icon next to a label.
pub const ICON_SIZE: f64 = 20.0;

/// Gap between an icon and its label.
pub const ICON_GAP: f64 = 8.0;

/// Built-in icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    /// A house.
    Home,
    /// A person.
    Profile,
    /// A calendar page.
    Calendar,
    /// A bell.
    Notifications,
    /// A bookmark ribbon.
    Bookmarks,
    /// A speech bubble.
    Messages,
    /// A gear.
    Settings,
    /// A circular arrow.
    Refresh,
}

fn path(points: &[(f64, f64)], close: bool) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        if close {
            path.close_path();
        }
    }
    path
}

/// Stroke `icon` into `rect` with `color`.
pub fn paint_icon(scene: &mut Scene, icon: Icon, rect: Rect, color: Color) {
    let scale = rect.width().min(rect.height()) / 24.0;
    let transform = Affine::translate(rect.origin().to_vec2()) * Affine::scale(scale);
    let stroke = Stroke::new(1.5);
    let mut draw = |shape: BezPath| {
        scene.stroke(&stroke, transform, &color, None, &shape);
    };

    match icon {
        Icon::Home => {
            draw(path(&[(3.0, 11.0), (12.0, 3.0), (21.0, 11.0)], false));
            draw(path(&[(5.0, 9.5), (5.0, 21.0), (19.0, 21.0), (19.0, 9.5)], false));
            draw(path(&[(10.0, 21.0), (10.0, 15.0), (14.0, 15.0), (14.0, 21.0)], false));
        }
        Icon::Profile => {
            draw(Circle::new((12.0, 8.0), 4.0).to_path(0.1));
            let mut shoulders = BezPath::new();
            shoulders.move_to((4.0, 21.0));
            shoulders.curve_to((4.0, 14.0), (20.0, 14.0), (20.0, 21.0));
            draw(shoulders);
        }
        Icon::Calendar => {
            draw(RoundedRect::new(3.0, 5.0, 21.0, 21.0, 2.0).to_path(0.1));
            draw(Line::new((3.0, 10.0), (21.0, 10.0)).to_path(0.1));
            draw(Line::new((8.0, 3.0), (8.0, 7.0)).to_path(0.1));
            draw(Line::new((16.0, 3.0), (16.0, 7.0)).to_path(0.1));
        }
        Icon::Notifications => {
            let mut bell = BezPath::new();
            bell.move_to((5.0, 17.0));
            bell.line_to((6.0, 15.0));
            bell.line_to((6.0, 10.0));
            bell.curve_to((6.0, 3.0), (18.0, 3.0), (18.0, 10.0));
            bell.line_to((18.0, 15.0));
            bell.line_to((19.0, 17.0));
            bell.close_path();
            draw(bell);
            draw(Line::new((10.0, 20.0), (14.0, 20.0)).to_path(0.1));
        }
        Icon::Bookmarks => {
            draw(path(
                &[(6.0, 3.0), (18.0, 3.0), (18.0, 21.0), (12.0, 16.0), (6.0, 21.0)],
                true,
            ));
        }
        Icon::Messages => {
            draw(RoundedRect::new(3.0, 4.0, 21.0, 16.0, 3.0).to_path(0.1));
            draw(path(&[(8.0, 16.0), (7.0, 21.0), (12.0, 16.0)], false));
        }
        Icon::Settings => {
            draw(Circle::new((12.0, 12.0), 3.0).to_path(0.1));
            draw(Circle::new((12.0, 12.0), 7.0).to_path(0.1));
            for step in 0..8 {
                let angle = step as f64 * std::f64::consts::FRAC_PI_4;
                let (sin, cos) = angle.sin_cos();
                draw(
                    Line::new(
                        (12.0 + cos * 7.0, 12.0 + sin * 7.0),
                        (12.0 + cos * 9.5, 12.0 + sin * 9.5),
                    )
                    .to_path(0.1),
                );
            }
        }
        Icon::Refresh => {
            let mut arc = BezPath::new();
            arc.move_to((19.0, 12.0));
            arc.curve_to((19.0, 20.0), (5.0, 20.0), (5.0, 12.0));
            arc.curve_to((5.0, 5.0), (15.0, 3.0), (18.0, 8.0));
            draw(arc);
            draw(path(&[(18.0, 3.0), (18.0, 8.0), (13.0, 8.0)], false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            icon: Icon,
        }
        let parsed: Wrapper = serde_json::from_str(r#"{"icon": "notifications"}"#).unwrap();
        assert_eq!(parsed.icon, Icon::Notifications);
    }

    #[test]
    fn test_paint_every_icon() {
        let mut scene = Scene::new();
        for icon in [
            Icon::Home,
            Icon::Profile,
            Icon::Calendar,
            Icon::Notifications,
            Icon::Bookmarks,
            Icon::Messages,
            Icon::Settings,
            Icon::Refresh,
        ] {
            paint_icon(&mut scene, icon, Rect::new(0.0, 0.0, 20.0, 20.0), Color::BLACK);
        }
        assert!(!scene.encoding().is_empty());
    }
}
