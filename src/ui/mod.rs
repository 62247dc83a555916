//! UI rendering module for the museum TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of the current view plus its overlays.
//!
//! # Module Structure
//!
//! - `panels` - One panel per view (entry, map, category, exhibit)
//! - `popups` - Modal dialogs (payment)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, View};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen: header, current view, footer, then the payment
/// popup and the toast on top.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    render_view(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    popups::payment::render(frame, size, app.payment.stage(), app.animation_tick);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

fn render_view(app: &App, frame: &mut Frame, area: Rect) {
    match &app.nav.view {
        View::Entry => panels::entry::render(frame, area),
        View::Map => panels::map::render(app, frame, area),
        View::Category(id) => panels::category::render(app, frame, area, id),
        View::Exhibit(id) => panels::exhibit::render(app, frame, area, id),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{buffer_to_string, map_app, museum_app, test_terminal_80x24};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(app: &App, terminal: &mut Terminal<TestBackend>) -> String {
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_entry_with_payment_popup(
        mut museum_app: App,
        mut test_terminal_80x24: Terminal<TestBackend>,
    ) {
        museum_app.execute_command(AppCommand::OpenPayment);

        let content = draw(&museum_app, &mut test_terminal_80x24);

        assert!(content.contains("Museum Entry"));
        assert!(content.contains("Entry fee: 1€"));
        assert!(content.contains("Esc:Close"));
    }

    #[rstest]
    #[case::map(View::Map, "Explore our collection by category")]
    #[case::category(View::Category("minimal-wonders".into()), "Select an exhibit to view")]
    #[case::exhibit(View::Exhibit("quicksort".into()), "Quicksort: The Elegant Sorting Algorithm")]
    #[case::missing(View::Exhibit("ghost".into()), "Exhibit not found")]
    fn test_each_view_renders_at_80x24(
        mut map_app: App,
        mut test_terminal_80x24: Terminal<TestBackend>,
        #[case] view: View,
        #[case] expected: &str,
    ) {
        map_app.nav.view = view;

        let content = draw(&map_app, &mut test_terminal_80x24);

        assert!(content.contains(expected), "missing {expected:?} in:\n{content}");
        assert!(content.contains("Code Aesthetica"));
    }

    #[rstest]
    fn test_toast_is_drawn_over_view(
        mut map_app: App,
        mut test_terminal_80x24: Terminal<TestBackend>,
    ) {
        map_app.ui.show_toast("[+] Code copied", 5);

        let content = draw(&map_app, &mut test_terminal_80x24);

        assert!(content.contains("[+] Code copied"));
    }

    #[rstest]
    fn test_tiny_terminal_does_not_panic(map_app: App) {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(&map_app, frame)).unwrap();
    }
}
