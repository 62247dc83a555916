//! The entrance: museum name, tagline and the way in.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::constants::{MUSEUM_NAME, TAGLINE};
use crate::theme::{FOCUSED_BORDER_STYLE, MUTED_COLOR, PRIMARY_COLOR};

/// Renders the entry screen centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::styled(
        MUSEUM_NAME,
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let tagline = Paragraph::new(TAGLINE)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(tagline, rows[2]);

    let button = Paragraph::new(vec![
        Line::styled("╭──────────────────╮", FOCUSED_BORDER_STYLE),
        Line::styled(
            "│   Enter Museum   │",
            FOCUSED_BORDER_STYLE.add_modifier(Modifier::BOLD),
        ),
        Line::styled("╰──────────────────╯", FOCUSED_BORDER_STYLE),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(button, rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_terminal_80x24};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_entry_shows_name_tagline_and_button(mut test_terminal_80x24: Terminal<TestBackend>) {
        test_terminal_80x24
            .draw(|frame| render(frame, frame.area()))
            .unwrap();

        let content = buffer_to_string(test_terminal_80x24.backend().buffer());
        assert!(content.contains("Code Aesthetica"));
        assert!(content.contains("let's remember its imperfections."));
        assert!(content.contains("Enter Museum"));
    }
}
