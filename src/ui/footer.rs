//! Footer rendering module for the museum TUI.
//!
//! The footer shows the keys that do something in the current input
//! context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(app.input_context().key_hints())
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{buffer_to_string, map_app, museum_app};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn render_footer(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_footer_follows_input_context(mut museum_app: App) {
        assert!(render_footer(&museum_app, 80).contains("Enter:Enter Museum"));

        museum_app.execute_command(AppCommand::OpenPayment);
        assert!(render_footer(&museum_app, 80).contains("Esc:Close"));
    }

    #[rstest]
    fn test_footer_is_centered(mut map_app: App) {
        map_app.nav.show_exhibit("foo-bar");
        let content = render_footer(&map_app, 80);
        let row = content.trim_end_matches('\n');

        assert!(row.contains("c:Copy"));
        let leading = row.len() - row.trim_start().len();
        let trailing = row.len() - row.trim_end().len();
        assert!(
            leading.abs_diff(trailing) <= 1,
            "leading {leading}, trailing {trailing}"
        );
    }

    #[rstest]
    fn test_footer_survives_narrow_terminal(map_app: App) {
        let content = render_footer(&map_app, 20);
        assert_eq!(content.trim_end_matches('\n').chars().count(), 20);
    }
}
