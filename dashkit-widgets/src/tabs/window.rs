// SPDX-License-Identifier: MIT OR Apache-2.0
//! The tab window: an ordered tab set, the active tab and the visible slice.

use std::ops::Range;

use dashkit_core::error::{DashError, DashResult};
use indexmap::IndexSet;

/// Which way the last selection moved through the tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Toward the start of the tab set.
    Backward,
    /// Same tab selected again, or nothing selected yet.
    #[default]
    Still,
    /// Toward the end of the tab set.
    Forward,
}

impl Direction {
    /// Direction from the previous to the next index.
    pub fn between(previous: usize, next: usize) -> Self {
        match next.cmp(&previous) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
        }
    }

    /// `-1`, `0` or `+1`.
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Ordered tab ids with an active tab and a sliding visible window.
///
/// Invariants:
/// - `start_index <= len.saturating_sub(max_visible)`
/// - the active tab, when the set is non-empty, is always a member
#[derive(Debug, Clone)]
pub struct TabWindow {
    ids: IndexSet<String>,
    start_index: usize,
    max_visible: usize,
    active: Option<usize>,
    direction: Direction,
}

impl TabWindow {
    /// Build a window over `ids` (display order = iteration order).
    ///
    /// The active tab is `default_active` when it names a member, otherwise
    /// the first tab. Fails on duplicate ids or a zero `max_visible`.
    pub fn new<I, S>(ids: I, max_visible: usize, default_active: Option<&str>) -> DashResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if max_visible == 0 {
            return Err(DashError::invalid_config("max_visible must be at least 1"));
        }

        let mut set = IndexSet::new();
        for id in ids {
            let id = id.into();
            if set.contains(&id) {
                return Err(DashError::duplicate_tab(id));
            }
            set.insert(id);
        }

        let active = match default_active {
            Some(id) => match set.get_index_of(id) {
                Some(index) => Some(index),
                None => {
                    log::warn!("Default tab '{}' is not in the tab set; using the first tab", id);
                    (!set.is_empty()).then_some(0)
                }
            },
            None => (!set.is_empty()).then_some(0),
        };

        Ok(Self {
            ids: set,
            start_index: 0,
            max_visible,
            active,
            direction: Direction::Still,
        })
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Maximum number of tabs shown at once.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// First visible index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Index of a tab id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    /// Id at an index.
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.ids.get_index(index).map(String::as_str)
    }

    /// All ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Index of the active tab.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Id of the active tab.
    pub fn active_id(&self) -> Option<&str> {
        self.active.and_then(|index| self.id_at(index))
    }

    /// Direction of the last selection.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Indices of the visible slice.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.start_index + self.max_visible).min(self.len());
        self.start_index..end
    }

    /// Ids of the visible slice.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_range()
            .filter_map(|index| self.id_at(index))
            .collect()
    }

    /// Whether the tab at `index` is inside the visible slice.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// Whether [TabWindow::scroll_left] would move the window.
    pub fn can_scroll_left(&self) -> bool {
        self.start_index > 0
    }

    /// Whether [TabWindow::scroll_right] would move the window.
    pub fn can_scroll_right(&self) -> bool {
        self.start_index + self.max_visible < self.len()
    }

    /// Make `id` the active tab. Unknown ids are ignored and return `false`.
    ///
    /// The window is not scrolled: selecting a tab outside the visible slice
    /// leaves it outside.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(next) = self.index_of(id) else {
            log::debug!("Ignoring selection of unknown tab '{}'", id);
            return false;
        };

        self.direction = match self.active {
            Some(previous) => Direction::between(previous, next),
            None => Direction::Still,
        };
        self.active = Some(next);
        true
    }

    /// Move the window one tab toward the start. Returns whether it moved.
    pub fn scroll_left(&mut self) -> bool {
        if !self.can_scroll_left() {
            return false;
        }
        self.start_index -= 1;
        true
    }

    /// Move the window one tab toward the end. Returns whether it moved.
    pub fn scroll_right(&mut self) -> bool {
        if !self.can_scroll_right() {
            return false;
        }
        let last_start = self.len().saturating_sub(self.max_visible);
        self.start_index = (self.start_index + 1).min(last_start);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(n: usize) -> Vec<String> {
        (b'A'..b'A' + n as u8).map(|c| (c as char).to_string()).collect()
    }

    #[test]
    fn test_scroll_right_walkthrough() {
        let mut window = TabWindow::new(letters(7), 5, None).unwrap();
        assert_eq!(window.visible_ids(), ["A", "B", "C", "D", "E"]);

        assert!(window.scroll_right());
        assert_eq!(window.start_index(), 1);
        assert_eq!(window.visible_ids(), ["B", "C", "D", "E", "F"]);

        assert!(window.scroll_right());
        assert_eq!(window.start_index(), 2);
        assert_eq!(window.visible_ids(), ["C", "D", "E", "F", "G"]);

        assert!(!window.scroll_right());
        assert_eq!(window.start_index(), 2);
    }

    #[test]
    fn test_scroll_left_stops_at_zero() {
        let mut window = TabWindow::new(letters(7), 5, None).unwrap();
        assert!(!window.scroll_left());
        window.scroll_right();
        assert!(window.scroll_left());
        assert!(!window.scroll_left());
        assert_eq!(window.start_index(), 0);
    }

    #[test]
    fn test_window_bounds_hold_under_any_sequence() {
        for len in 0..9 {
            for max_visible in 1..10 {
                let mut window = TabWindow::new(letters(len), max_visible, None).unwrap();
                for step in 0..40 {
                    if (step * 7 + len) % 3 == 0 {
                        window.scroll_left();
                    } else {
                        window.scroll_right();
                    }
                    assert!(window.start_index() <= len.saturating_sub(max_visible));
                    assert!(window.visible_range().end <= len);
                }
            }
        }
    }

    #[test]
    fn test_everything_visible_when_max_covers_set() {
        let mut window = TabWindow::new(letters(3), 5, None).unwrap();
        assert!(!window.can_scroll_left());
        assert!(!window.can_scroll_right());
        assert!(!window.scroll_right());
        assert!(!window.scroll_left());
        assert_eq!(window.visible_ids(), ["A", "B", "C"]);
    }

    #[test]
    fn test_direction_follows_index_order() {
        let mut window = TabWindow::new(letters(5), 5, Some("C")).unwrap();
        assert_eq!(window.direction(), Direction::Still);

        window.select("E");
        assert_eq!(window.direction(), Direction::Forward);
        assert_eq!(window.direction().signum(), 1);

        window.select("A");
        assert_eq!(window.direction(), Direction::Backward);

        window.select("A");
        assert_eq!(window.direction(), Direction::Still);
        assert_eq!(window.direction().signum(), 0);
    }

    #[test]
    fn test_select_does_not_scroll() {
        let mut window = TabWindow::new(letters(7), 3, None).unwrap();
        assert!(window.select("G"));
        assert_eq!(window.active_id(), Some("G"));
        assert_eq!(window.start_index(), 0);
        assert!(!window.is_visible(6));
    }

    #[test]
    fn test_unknown_selection_is_ignored() {
        let mut window = TabWindow::new(letters(3), 3, Some("B")).unwrap();
        assert!(!window.select("Z"));
        assert_eq!(window.active_id(), Some("B"));
    }

    #[test]
    fn test_active_always_member() {
        let mut window = TabWindow::new(letters(4), 2, Some("nope")).unwrap();
        assert_eq!(window.active_id(), Some("A"));
        for id in ["D", "x", "B", "", "C"] {
            window.select(id);
            let active = window.active_id().unwrap();
            assert!(window.index_of(active).is_some());
        }
    }

    #[test]
    fn test_empty_set() {
        let window = TabWindow::new(Vec::<String>::new(), 5, None).unwrap();
        assert_eq!(window.active_id(), None);
        assert!(!window.can_scroll_left());
        assert!(!window.can_scroll_right());
        assert!(window.visible_ids().is_empty());
    }

    #[test]
    fn test_rejects_duplicates_and_zero_window() {
        assert!(matches!(
            TabWindow::new(["a", "b", "a"], 2, None),
            Err(DashError::DuplicateTab { .. })
        ));
        assert!(matches!(
            TabWindow::new(["a"], 0, None),
            Err(DashError::InvalidConfig { .. })
        ));
    }
}
