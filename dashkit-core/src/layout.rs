// SPDX-License-Identifier: MIT OR Apache-2.0
pub use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, JustifyContent,
    LengthPercentage, LengthPercentageAuto, NodeId, Overflow, Style, TaffyTree,
};
use vello::kurbo::{Point, Rect};

/// The result of a layout pass for one widget and its children.
///
/// Bounds are absolute window coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutNode {
    /// The widget's box.
    pub bounds: Rect,
    /// Child boxes, in the widget's own child order.
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// A leaf node.
    pub fn leaf(bounds: Rect) -> Self {
        Self {
            bounds,
            children: Vec::new(),
        }
    }

    /// A node with children.
    pub fn with_children(bounds: Rect, children: Vec<LayoutNode>) -> Self {
        Self { bounds, children }
    }
}

/// Convert a computed taffy layout into an absolute rect, given the absolute
/// origin of the parent node.
pub fn absolute_rect(layout: &taffy::Layout, parent_origin: Point) -> Rect {
    let x = parent_origin.x + layout.location.x as f64;
    let y = parent_origin.y + layout.location.y as f64;
    Rect::new(
        x,
        y,
        x + layout.size.width as f64,
        y + layout.size.height as f64,
    )
}

/// Fixed-size taffy dimensions.
pub fn fixed_size(width: f64, height: f64) -> taffy::Size<Dimension> {
    taffy::Size {
        width: Dimension::length(width as f32),
        height: Dimension::length(height as f32),
    }
}

/// Definite available space for a rect.
pub fn available(rect: Rect) -> taffy::Size<AvailableSpace> {
    taffy::Size {
        width: AvailableSpace::Definite(rect.width() as f32),
        height: AvailableSpace::Definite(rect.height() as f32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_rect_offsets_by_parent() {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let leaf = tree
            .new_leaf(Style {
                size: fixed_size(40.0, 10.0),
                ..Default::default()
            })
            .unwrap();
        let root = tree
            .new_with_children(
                Style {
                    size: fixed_size(100.0, 10.0),
                    justify_content: Some(JustifyContent::End),
                    ..Default::default()
                },
                &[leaf],
            )
            .unwrap();
        tree.compute_layout(root, available(Rect::new(0.0, 0.0, 100.0, 10.0)))
            .unwrap();

        let rect = absolute_rect(tree.layout(leaf).unwrap(), Point::new(5.0, 7.0));
        assert_eq!(rect, Rect::new(65.0, 7.0, 105.0, 17.0));
    }
}
