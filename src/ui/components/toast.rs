//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. The message prefix
//! picks the color: `[+]` for success, `[x]` for errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
/// Distance from the right and bottom edges.
const TOAST_MARGIN: u16 = 2;
/// Borders plus one space either side of the text.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Renders `message` as a toast inside `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_position(area, message);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(block, toast_area);
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(text_color(message)))
            .alignment(Alignment::Center),
        inner,
    );
}

/// Bottom-right placement, as wide as the message but at most half the area.
fn toast_position(area: Rect, message: &str) -> Rect {
    let message_width = message.chars().count() as u16;
    let width = (message_width + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    Rect::new(
        area.x + area.width.saturating_sub(width + TOAST_MARGIN),
        area.y + area.height.saturating_sub(height + TOAST_MARGIN),
        width,
        height,
    )
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::success("[+] Code copied", SUCCESS_COLOR)]
    #[case::error("[x] Clipboard not available", ERROR_COLOR)]
    #[case::plain("Welcome", Color::White)]
    #[case::empty("", Color::White)]
    fn test_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(text_color(message), expected);
    }

    #[rstest]
    #[case::short("Hi", MIN_TOAST_WIDTH)]
    #[case::fits("[+] Code copied", MIN_TOAST_WIDTH)]
    #[case::capped("a message far longer than half of the hundred column area", 50)]
    fn test_toast_width(#[case] message: &str, #[case] expected: u16) {
        let area = Rect::new(0, 0, 100, 40);
        let toast = toast_position(area, message);

        assert_eq!(toast.width, expected);
        assert_eq!(toast.height, TOAST_HEIGHT);
        assert_eq!(toast.right(), 100 - TOAST_MARGIN);
        assert_eq!(toast.bottom(), 40 - TOAST_MARGIN);
    }

    #[test]
    fn test_toast_stays_inside_tiny_area() {
        let area = Rect::new(0, 0, 10, 2);
        let toast = toast_position(area, "[+] Code copied");

        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[test]
    fn test_render_toast_shows_message() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Code copied"))
            .unwrap();

        assert!(buffer_to_string(terminal.backend().buffer()).contains("[+] Code copied"));
    }
}
