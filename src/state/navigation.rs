//! Navigation state for the museum TUI.
//!
//! This module tracks which view is on screen and which item is highlighted
//! in it:
//! - The current [`View`] (entry, map, category listing, exhibit)
//! - The highlighted category marker on the map
//! - The highlighted exhibit in a category listing
//!
//! # Design
//!
//! Views refer to catalog entities by id only. An id that no longer
//! resolves is rendered as a "not found" placeholder rather than rejected
//! here.

// ============================================================================
// View
// ============================================================================

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Title screen with the payment gate.
    #[default]
    Entry,
    /// Spatial map of categories.
    Map,
    /// Exhibit listing for a category id.
    Category(String),
    /// Detail view of an exhibit id.
    Exhibit(String),
}

impl View {
    /// Short label for the header breadcrumb.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entrance",
            Self::Map => "Museum Map",
            Self::Category(_) => "Gallery",
            Self::Exhibit(_) => "Exhibit",
        }
    }
}

// ============================================================================
// Navigation State
// ============================================================================

/// Current view plus the highlighted item of the map and of the listing.
#[derive(Debug, Default)]
pub struct NavigationState {
    /// The view on screen.
    pub view: View,
    /// Highlighted category on the map, as an index into the catalog.
    pub map_index: usize,
    /// Highlighted exhibit in the category listing.
    pub list_index: usize,
    /// First visible line of the shown exhibit's code.
    pub code_scroll: usize,
}

impl NavigationState {
    /// Creates navigation state on the entry screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_map(&mut self) {
        self.view = View::Map;
    }

    /// Opens a category listing with its first exhibit highlighted.
    pub fn show_category(&mut self, category_id: impl Into<String>) {
        self.view = View::Category(category_id.into());
        self.list_index = 0;
    }

    /// Shows an exhibit from the top of its code.
    pub fn show_exhibit(&mut self, exhibit_id: impl Into<String>) {
        self.view = View::Exhibit(exhibit_id.into());
        self.code_scroll = 0;
    }

    #[must_use]
    pub fn current_exhibit(&self) -> Option<&str> {
        match &self.view {
            View::Exhibit(id) => Some(id),
            _ => None,
        }
    }

    /// Moves the map highlight, wrapping at both ends.
    pub fn cycle_map(&mut self, len: usize, forward: bool) {
        self.map_index = step_index(self.map_index, len, forward, true);
    }

    /// Moves the listing highlight, stopping at both ends.
    pub fn move_list(&mut self, len: usize, forward: bool) {
        self.list_index = step_index(self.list_index, len, forward, false);
    }

    /// Scrolls the code by one line within `0..line_count`.
    pub fn scroll_code(&mut self, line_count: usize, forward: bool) {
        self.code_scroll = step_index(self.code_scroll, line_count, forward, false);
    }
}

/// Steps `index` within `0..len`.
fn step_index(index: usize, len: usize, forward: bool, wrap: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let index = index.min(len - 1);
    match (forward, wrap) {
        (true, true) => (index + 1) % len,
        (true, false) => (index + 1).min(len - 1),
        (false, true) => index.checked_sub(1).unwrap_or(len - 1),
        (false, false) => index.saturating_sub(1),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_navigation_starts_at_entry() {
        let nav = NavigationState::new();
        assert_eq!(nav.view, View::Entry);
        assert!(nav.current_exhibit().is_none());
    }

    #[test]
    fn test_show_category_resets_listing() {
        let mut nav = NavigationState::new();
        nav.list_index = 3;
        nav.show_category("minimal-wonders");

        assert_eq!(nav.view, View::Category("minimal-wonders".into()));
        assert_eq!(nav.list_index, 0);
    }

    #[rstest]
    #[case::forward_wraps(3, 4, true, true, 0)]
    #[case::backward_wraps(0, 4, false, true, 3)]
    #[case::forward_clamps(3, 4, true, false, 3)]
    #[case::backward_clamps(0, 4, false, false, 0)]
    #[case::stale_index_is_clamped(9, 2, true, false, 1)]
    #[case::empty(0, 0, true, true, 0)]
    fn test_step_index(
        #[case] index: usize,
        #[case] len: usize,
        #[case] forward: bool,
        #[case] wrap: bool,
        #[case] expected: usize,
    ) {
        assert_eq!(step_index(index, len, forward, wrap), expected);
    }

    #[test]
    fn test_code_scroll_stops_at_last_line_and_resets() {
        let mut nav = NavigationState::new();
        nav.show_exhibit("a");

        for _ in 0..5 {
            nav.scroll_code(3, true);
        }
        assert_eq!(nav.code_scroll, 2);

        nav.scroll_code(3, false);
        assert_eq!(nav.code_scroll, 1);

        nav.show_exhibit("b");
        assert_eq!(nav.code_scroll, 0);
    }

    #[test]
    fn test_view_labels() {
        assert_eq!(View::Map.label(), "Museum Map");
        assert_eq!(View::Exhibit("x".into()).label(), "Exhibit");
    }
}
