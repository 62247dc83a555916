//! Header rendering for the museum TUI.
//!
//! Renders the museum name with a slow glow and a breadcrumb of where the
//! visitor is.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::MUSEUM_NAME;
use crate::state::{App, View};
use crate::theme::MUTED_COLOR;

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Paragraph::new(create_animated_title(app.animation_tick)).alignment(Alignment::Left);
    let title_area = Rect::new(
        inner.x + 1,
        inner.y,
        (MUSEUM_NAME.chars().count() as u16).min(inner.width.saturating_sub(1)),
        1,
    );
    frame.render_widget(title, title_area);

    if inner.width > 40 {
        let crumbs = Paragraph::new(breadcrumb(app))
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Right);
        let crumbs_x = title_area.right() + 1;
        let crumbs_area = Rect::new(
            crumbs_x,
            inner.y,
            inner.right().saturating_sub(crumbs_x + 1),
            1,
        );
        frame.render_widget(crumbs, crumbs_area);
    }
}

/// The museum name with a gold glow that breathes with the tick.
fn create_animated_title(animation_tick: u64) -> Line<'static> {
    let glow = ((animation_tick as f32 * 0.12).sin() + 1.0) / 2.0;
    let color = Color::Rgb(
        (180.0 + glow * 44.0) as u8,
        (140.0 + glow * 35.0) as u8,
        (80.0 + glow * 24.0) as u8,
    );

    Line::from(Span::styled(
        MUSEUM_NAME,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Where the visitor is, e.g. `Museum Map › Elegant Functions`.
fn breadcrumb(app: &App) -> String {
    let catalog = &app.catalog;
    match &app.nav.view {
        View::Entry | View::Map => app.nav.view.label().to_string(),
        View::Category(id) => {
            let name = catalog
                .category_by_id(id)
                .map_or("Exhibits", |c| c.name.as_str());
            format!("Museum Map › {name}")
        }
        View::Exhibit(id) => match catalog.exhibit_by_id(id) {
            Some(exhibit) => {
                let gallery = catalog
                    .category_by_id(&exhibit.category)
                    .map_or(exhibit.category.as_str(), |c| c.name.as_str());
                format!("Museum Map › {gallery} › {}", exhibit.title)
            }
            None => "Museum Map › Exhibit".to_string(),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
