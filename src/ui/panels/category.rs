//! A gallery: the exhibits of one category.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::domain::Exhibit;
use crate::state::App;
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR};
use crate::ui::helpers::create_border_block;

/// Renders the listing for `category_id`.
///
/// An unknown category gets the generic "Exhibits" heading and an empty
/// listing.
pub fn render(app: &App, frame: &mut Frame, area: Rect, category_id: &str) {
    let heading = app
        .catalog
        .category_by_id(category_id)
        .map_or("Exhibits", |c| c.name.as_str());
    let exhibits = app.catalog.exhibits_in_category(category_id);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::styled(
            heading.to_string(),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled("Select an exhibit to view", Style::default().fg(MUTED_COLOR)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    let block = create_border_block("Exhibits", true);

    if exhibits.is_empty() {
        let empty = Paragraph::new("No exhibits in this gallery")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, rows[1]);
        return;
    }

    let items: Vec<ListItem> = exhibits.iter().copied().map(exhibit_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(
        app.nav.list_index.min(exhibits.len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(list, rows[1], &mut state);
}

/// Title with language badge, then the description, then a spacer.
fn exhibit_item(exhibit: &Exhibit) -> ListItem<'static> {
    let mut title = vec![Span::styled(
        exhibit.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !exhibit.language.is_empty() {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            format!("[{}]", exhibit.language),
            Style::default().fg(SECONDARY_COLOR),
        ));
    }

    ListItem::new(vec![
        Line::from(title),
        Line::styled(
            exhibit.description.clone(),
            Style::default().fg(MUTED_COLOR),
        ),
        Line::default(),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, map_app, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(app: &App, terminal: &mut Terminal<TestBackend>, category_id: &str) -> String {
        terminal
            .draw(|frame| render(app, frame, frame.area(), category_id))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_listing_shows_exhibits_with_highlight(
        mut map_app: App,
        mut test_terminal: Terminal<TestBackend>,
    ) {
        map_app.nav.show_category("creative-algorithms");
        map_app.nav.list_index = 1;

        let content = draw(&map_app, &mut test_terminal, "creative-algorithms");

        assert!(content.contains("Creative Algorithms"));
        assert!(content.contains("Select an exhibit to view"));
        assert!(content.contains("Fibonacci: The One-liner  [javascript]"));
        assert!(content.contains("▶ Quicksort: The Elegant Sorting Algorithm"));
        assert!(content.contains("A concise and elegant implementation"));
    }

    #[rstest]
    fn test_unknown_category_uses_generic_heading(
        map_app: App,
        mut test_terminal: Terminal<TestBackend>,
    ) {
        let content = draw(&map_app, &mut test_terminal, "ghost");

        assert!(content.contains("Exhibits"));
        assert!(content.contains("No exhibits in this gallery"));
    }

    #[test]
    fn test_item_omits_empty_language_badge() {
        let bare = Exhibit::new("bare", "Bare", "c");
        let tagged = bare.clone().with_code("x", "rust");
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();

        terminal
            .draw(|frame| {
                let list = List::new([exhibit_item(&bare), exhibit_item(&tagged)]);
                frame.render_widget(list, frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let rows: Vec<&str> = content.lines().collect();
        assert_eq!(rows[0].trim_end(), "Bare");
        assert_eq!(rows[3].trim_end(), "Bare  [rust]");
    }
}
