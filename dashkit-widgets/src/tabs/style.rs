// SPDX-License-Identifier: MIT OR Apache-2.0
use dashkit_core::layout::{FlexDirection, JustifyContent};
use serde::{Deserialize, Serialize};

/// Which way the tab strip runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tabs in a row above the content.
    #[default]
    Horizontal,
    /// Tabs in a column left of the content.
    Vertical,
}

impl Orientation {
    /// Flex direction of the tab list.
    pub fn flex_direction(self) -> FlexDirection {
        match self {
            Orientation::Horizontal => FlexDirection::Row,
            Orientation::Vertical => FlexDirection::Column,
        }
    }
}

/// Distribution of tabs along the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlign {
    /// Packed toward the start.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Packed toward the end.
    End,
    /// First and last tab at the edges, equal gaps between.
    Between,
    /// Equal space around every tab.
    Around,
}

impl TabAlign {
    /// The flex `justify-content` for this alignment.
    pub fn justify_content(self) -> JustifyContent {
        match self {
            TabAlign::Start => JustifyContent::FlexStart,
            TabAlign::Center => JustifyContent::Center,
            TabAlign::End => JustifyContent::FlexEnd,
            TabAlign::Between => JustifyContent::SpaceBetween,
            TabAlign::Around => JustifyContent::SpaceAround,
        }
    }
}

/// Label size of the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabSize {
    /// 14px labels.
    Sm,
    /// 16px labels.
    #[default]
    Md,
    /// 18px labels.
    Lg,
}

impl TabSize {
    /// Label font size in pixels.
    pub fn font_size(self) -> f64 {
        match self {
            TabSize::Sm => 14.0,
            TabSize::Md => 16.0,
            TabSize::Lg => 18.0,
        }
    }

    /// Padding as `(vertical, horizontal)` pixels.
    pub fn padding(self) -> (f64, f64) {
        match self {
            TabSize::Sm => (4.0, 8.0),
            TabSize::Md => (8.0, 16.0),
            TabSize::Lg => (12.0, 24.0),
        }
    }
}

/// Decoration of each tab control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStyle {
    /// Plain tabs separated by a small margin.
    #[default]
    Default,
    /// No decoration.
    Plain,
    /// Rounded background on hover and when active.
    Rounded,
    /// Bordered box, highlighted when active.
    Boxed,
    /// No decoration.
    Minimal,
}

impl TabStyle {
    /// Margin on each side of a tab along the strip.
    pub fn margin(self) -> f64 {
        match self {
            TabStyle::Default => 4.0,
            TabStyle::Plain | TabStyle::Rounded | TabStyle::Boxed | TabStyle::Minimal => 0.0,
        }
    }

    /// Corner radius of the hover/active background, if the style draws one.
    pub fn background_radius(self) -> Option<f64> {
        match self {
            TabStyle::Rounded => Some(8.0),
            TabStyle::Default | TabStyle::Plain | TabStyle::Boxed | TabStyle::Minimal => None,
        }
    }

    /// Border width, if the style draws one.
    pub fn border_width(self) -> Option<f64> {
        match self {
            TabStyle::Boxed => Some(2.0),
            TabStyle::Default | TabStyle::Plain | TabStyle::Rounded | TabStyle::Minimal => None,
        }
    }
}
