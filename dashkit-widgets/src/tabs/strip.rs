// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tab strip layout: chevrons, the visible tabs and the content panel.

use dashkit_core::error::DashResult;
use dashkit_core::layout::{
    absolute_rect, available, fixed_size, AlignItems, Dimension, LengthPercentageAuto, NodeId,
    Style, TaffyTree,
};
use dashkit_core::text::{TextRenderer, LINE_HEIGHT};
use vello::kurbo::{Point, Rect};

use crate::icon::{ICON_GAP, ICON_SIZE};
use crate::tabs::style::{Orientation, TabAlign, TabSize, TabStyle};

/// Side length of a scroll chevron.
pub const CHEVRON_SIZE: f64 = 24.0;

/// Space between the strip and the content panel.
pub const CONTENT_SPACING: f64 = 16.0;

/// Share of the width taken by a vertical strip.
pub const VERTICAL_STRIP_SHARE: f64 = 0.25;

/// Presentation settings that affect the strip geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripParams {
    /// Strip direction.
    pub orientation: Orientation,
    /// Distribution of tabs along the strip.
    pub align: TabAlign,
    /// Label size and padding.
    pub size: TabSize,
    /// Tab decoration (contributes margins).
    pub style: TabStyle,
    /// Whether icons take space.
    pub show_icons: bool,
}

/// One visible tab to place.
#[derive(Debug, Clone, Copy)]
pub struct StripItem<'a> {
    /// Index in the full tab set.
    pub index: usize,
    /// Label text.
    pub label: &'a str,
    /// Whether the tab has an icon.
    pub has_icon: bool,
}

/// Laid-out strip. All rects are absolute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripLayout {
    /// The whole strip including chevrons.
    pub strip: Rect,
    /// The tab list between the chevrons.
    pub list: Rect,
    /// Visible tabs as `(index in tab set, rect)`, in display order.
    pub tabs: Vec<(usize, Rect)>,
    /// The scroll-left chevron, present only when scrolling left is possible.
    pub scroll_left: Option<Rect>,
    /// The scroll-right chevron, present only when scrolling right is possible.
    pub scroll_right: Option<Rect>,
    /// The content panel.
    pub content: Rect,
}

impl StripLayout {
    /// Rect of the tab with the given set index, if it is visible.
    pub fn tab_rect(&self, index: usize) -> Option<Rect> {
        self.tabs
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, rect)| *rect)
    }

    /// Set index of the visible tab under `point`.
    pub fn tab_at(&self, point: Point) -> Option<usize> {
        self.tabs
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(i, _)| *i)
    }
}

fn tab_size(item: &StripItem<'_>, params: &StripParams, text: &dyn TextRenderer) -> (f64, f64) {
    let font_size = params.size.font_size();
    let (pad_v, pad_h) = params.size.padding();
    let label = text.measure(item.label, font_size);

    let icon = params.show_icons && item.has_icon;
    let icon_width = if icon { ICON_SIZE + ICON_GAP } else { 0.0 };
    let content_height = if icon {
        label.height.max(ICON_SIZE)
    } else {
        label.height
    };

    (label.width + icon_width + pad_h * 2.0, content_height + pad_v * 2.0)
}

/// Lay out the strip inside `bounds`.
pub fn layout_strip(
    bounds: Rect,
    params: &StripParams,
    items: &[StripItem<'_>],
    can_scroll_left: bool,
    can_scroll_right: bool,
    text: &dyn TextRenderer,
) -> DashResult<StripLayout> {
    let sizes: Vec<(f64, f64)> = items
        .iter()
        .map(|item| tab_size(item, params, text))
        .collect();

    let (pad_v, _) = params.size.padding();
    let empty_height = params.size.font_size() * LINE_HEIGHT + pad_v * 2.0;
    let row_height = sizes
        .iter()
        .map(|(_, h)| *h)
        .fold(empty_height.max(CHEVRON_SIZE), f64::max);

    let (strip, content) = match params.orientation {
        Orientation::Horizontal => {
            let strip_bottom = (bounds.y0 + row_height).min(bounds.y1);
            (
                Rect::new(bounds.x0, bounds.y0, bounds.x1, strip_bottom),
                Rect::new(
                    bounds.x0,
                    (strip_bottom + CONTENT_SPACING).min(bounds.y1),
                    bounds.x1,
                    bounds.y1,
                ),
            )
        }
        Orientation::Vertical => {
            let strip_right = bounds.x0 + bounds.width() * VERTICAL_STRIP_SHARE;
            (
                Rect::new(bounds.x0, bounds.y0, strip_right, bounds.y1),
                Rect::new(
                    (strip_right + CONTENT_SPACING).min(bounds.x1),
                    bounds.y0,
                    bounds.x1,
                    bounds.y1,
                ),
            )
        }
    };

    let direction = params.orientation.flex_direction();
    let margin = LengthPercentageAuto::length(params.style.margin() as f32);
    let zero = LengthPercentageAuto::length(0.0);
    let margins = taffy::Rect {
        left: margin,
        right: margin,
        top: zero,
        bottom: zero,
    };

    let mut tree: TaffyTree<()> = TaffyTree::new();
    tree.disable_rounding();

    let mut tab_nodes = Vec::with_capacity(items.len());
    for (width, height) in &sizes {
        // vertical tabs stretch across the strip, inside their margins
        let (size, align_self) = match params.orientation {
            Orientation::Horizontal => (fixed_size(*width, *height), None),
            Orientation::Vertical => (
                taffy::Size {
                    width: Dimension::auto(),
                    height: Dimension::length(*height as f32),
                },
                Some(AlignItems::Stretch),
            ),
        };
        tab_nodes.push(tree.new_leaf(Style {
            size,
            margin: margins,
            align_self,
            flex_shrink: 0.0,
            ..Default::default()
        })?);
    }

    let list_cross = match params.orientation {
        Orientation::Horizontal => taffy::Size {
            width: Dimension::auto(),
            height: Dimension::percent(1.0),
        },
        Orientation::Vertical => taffy::Size {
            width: Dimension::percent(1.0),
            height: Dimension::auto(),
        },
    };
    let list = tree.new_with_children(
        Style {
            flex_direction: direction,
            justify_content: Some(params.align.justify_content()),
            align_items: Some(AlignItems::Center),
            flex_grow: 1.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::length(0.0),
            size: list_cross,
            ..Default::default()
        },
        &tab_nodes,
    )?;

    let chevron = |tree: &mut TaffyTree<()>| -> DashResult<NodeId> {
        Ok(tree.new_leaf(Style {
            size: fixed_size(CHEVRON_SIZE, CHEVRON_SIZE),
            flex_shrink: 0.0,
            ..Default::default()
        })?)
    };
    let left = can_scroll_left.then(|| chevron(&mut tree)).transpose()?;
    let right = can_scroll_right.then(|| chevron(&mut tree)).transpose()?;

    let children: Vec<NodeId> = left.into_iter().chain([list]).chain(right).collect();
    let root = tree.new_with_children(
        Style {
            flex_direction: direction,
            align_items: Some(AlignItems::Center),
            size: fixed_size(strip.width(), strip.height()),
            ..Default::default()
        },
        &children,
    )?;

    tree.compute_layout(root, available(strip))?;

    let origin = strip.origin();
    let list_rect = absolute_rect(tree.layout(list)?, origin);
    let mut tabs = Vec::with_capacity(items.len());
    for (item, node) in items.iter().zip(&tab_nodes) {
        tabs.push((item.index, absolute_rect(tree.layout(*node)?, list_rect.origin())));
    }
    let scroll_left = match left {
        Some(node) => Some(absolute_rect(tree.layout(node)?, origin)),
        None => None,
    };
    let scroll_right = match right {
        Some(node) => Some(absolute_rect(tree.layout(node)?, origin)),
        None => None,
    };

    log::trace!("Laid out {} tabs in {:?}", tabs.len(), list_rect);

    Ok(StripLayout {
        strip,
        list: list_rect,
        tabs,
        scroll_left,
        scroll_right,
        content,
    })
}
