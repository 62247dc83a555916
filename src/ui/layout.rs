//! Layout calculations for the museum TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows
pub const FOOTER_HEIGHT: u16 = 1;

/// Width of the detail panel beside the map
pub const MAP_SIDE_PANEL_WIDTH: u16 = 34;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (museum name, breadcrumb)
    pub header: Rect,
    /// Main content area (the current view)
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

/// Map canvas plus the detail panel for the highlighted category
#[derive(Debug, Clone, Copy)]
pub struct MapLayout {
    pub canvas: Rect,
    /// `None` when the terminal is too narrow to spare the panel.
    pub side: Option<Rect>,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Split the map view, dropping the side panel below twice its width.
#[must_use]
pub fn calculate_map_layout(area: Rect) -> MapLayout {
    if area.width < MAP_SIDE_PANEL_WIDTH * 2 {
        return MapLayout {
            canvas: area,
            side: None,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(MAP_SIDE_PANEL_WIDTH)])
        .split(area);

    MapLayout {
        canvas: chunks[0],
        side: Some(chunks[1]),
    }
}

/// Calculate a centered popup area, keeping a two-cell margin to the parent.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
