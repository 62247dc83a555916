//! A single exhibit: its code in a frame, the placard, and the way on.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::domain::{Adjacent, Exhibit};
use crate::state::App;
use crate::theme::{CODE_STYLE, MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR};
use crate::ui::helpers::create_border_block;

/// Renders the exhibit `exhibit_id`, or a placeholder if it does not exist.
pub fn render(app: &App, frame: &mut Frame, area: Rect, exhibit_id: &str) {
    let Some(exhibit) = app.catalog.exhibit_by_id(exhibit_id) else {
        render_not_found(frame, area);
        return;
    };
    let adjacent = app.catalog.adjacent_in_category(exhibit_id);

    let line_count = exhibit.code.lines().count();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(code_frame_height(line_count)),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::styled(
        exhibit.title.clone(),
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let visible = usize::from(rows[1].height.saturating_sub(2));
    let scroll = app
        .nav
        .code_scroll
        .min(line_count.saturating_sub(visible));
    frame.render_widget(code_frame(exhibit, scroll, visible, line_count), rows[1]);

    let placard = Paragraph::new(exhibit.description.as_str())
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(placard, inner_margin(rows[2]));

    frame.render_widget(Paragraph::new(neighbour_line(&adjacent)), rows[3]);
}

/// Rows needed to show `line_count` lines of code inside a border.
fn code_frame_height(line_count: usize) -> u16 {
    u16::try_from(line_count.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// The code, verbatim, with the language badge on the top-right border.
///
/// Code taller than the frame starts at line `scroll` and shows the visible
/// range on the bottom border.
fn code_frame(
    exhibit: &Exhibit,
    scroll: usize,
    visible: usize,
    line_count: usize,
) -> Paragraph<'_> {
    let mut block = create_border_block("Code", false);
    if !exhibit.language.is_empty() {
        block = block.title_top(
            Line::styled(
                format!(" {} ", exhibit.language),
                Style::default().fg(SECONDARY_COLOR),
            )
            .right_aligned(),
        );
    }

    if line_count > visible && visible > 0 {
        block = block.title_bottom(
            Line::styled(
                format!(
                    " lines {}-{} of {line_count}  ↑↓ ",
                    scroll + 1,
                    scroll + visible
                ),
                Style::default().fg(MUTED_COLOR),
            )
            .right_aligned(),
        );
    }

    Paragraph::new(Text::raw(exhibit.code.as_str()))
        .style(CODE_STYLE)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
}

/// `← title` on the left and `title →` on the right, when they exist.
fn neighbour_line(adjacent: &Adjacent<'_>) -> Line<'static> {
    let muted = Style::default().fg(MUTED_COLOR);
    if adjacent.is_isolated() {
        return Line::styled("Esc to return to the gallery", muted).centered();
    }

    let mut spans = Vec::new();

    if let Some(previous) = adjacent.previous {
        spans.push(Span::styled(format!("← {}", previous.title), muted));
    }
    if let Some(next) = adjacent.next {
        if !spans.is_empty() {
            spans.push(Span::styled("   ·   ", muted));
        }
        spans.push(Span::styled(format!("{} →", next.title), muted));
    }

    Line::from(spans).centered()
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(vec![
        Line::default(),
        Line::styled(
            "Exhibit not found",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled("Press Esc to go back", Style::default().fg(MUTED_COLOR)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(placeholder, area);
}

fn inner_margin(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    }
}

// ============================================================================
// Tests
// ============================================================================
