//! UI helper functions for creating styled blocks.
//!
//! Reusable block builders so every panel and popup frames its content the
//! same way.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` marker before the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            padded_title(title, "● "),
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            padded_title(title, ""),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
}

fn padded_title(title: &str, marker: &str) -> String {
    if title.is_empty() {
        String::new()
    } else {
        format!(" {marker}{title} ")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        layout::{Constraint, Direction, Layout},
    };

    #[test]
    fn test_block_titles() {
        let mut terminal = Terminal::new(TestBackend::new(30, 9)).unwrap();

        terminal
            .draw(|frame| {
                let areas = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3); 3])
                    .split(frame.area());

                frame.render_widget(create_border_block("Gallery", false), areas[0]);
                frame.render_widget(create_border_block("Gallery", true), areas[1]);
                frame.render_widget(create_popup_block("Ticket"), areas[2]);
            })
            .unwrap();

        let rows: Vec<String> = buffer_to_string(terminal.backend().buffer())
            .lines()
            .map(str::to_string)
            .collect();

        assert!(rows[0].starts_with("╭ Gallery "));
        assert!(rows[3].starts_with("╔ ● Gallery "));
        assert!(rows[6].contains(" Ticket "));
        assert!(rows[6].starts_with('╭'));
    }

    #[test]
    fn test_empty_title_has_no_padding() {
        assert_eq!(padded_title("", "● "), "");
        assert_eq!(padded_title("Map", ""), " Map ");
    }
}
