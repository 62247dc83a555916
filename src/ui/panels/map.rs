//! The museum floor plan.
//!
//! Categories sit at their plane positions on a canvas, over a floor
//! outline and a dashed grid. The highlighted category gets a filled marker
//! and its details in the side panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph, Wrap,
        canvas::{Canvas, Points, Rectangle},
    },
};

use crate::domain::exhibit::{PLANE_MAX, PLANE_MIN};
use crate::domain::{Category, Position};
use crate::state::App;
use crate::theme::{GRID_COLOR, MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::calculate_map_layout;

/// Floor outline inset, in plane units.
const FLOOR_INSET: f64 = 10.0;

/// Positions of the dashed grid lines, in plane units.
const GRID_LINES: [f64; 3] = [30.0, 50.0, 70.0];

/// Plane units between two dots of a dashed line.
const DASH_STEP: f64 = 2.0;

/// Renders the map view.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let subtitle = Paragraph::new("Explore our collection by category")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[0]);

    let layout = calculate_map_layout(rows[1]);
    let categories = app.catalog.categories();
    let highlighted = categories.get(app.nav.map_index);

    render_canvas(frame, layout.canvas, categories, app.nav.map_index);

    if let Some(side) = layout.side {
        render_side_panel(app, frame, side, highlighted);
    }
}

fn render_canvas(frame: &mut Frame, area: Rect, categories: &[Category], highlighted: usize) {
    let block = create_border_block("Museum Map", true);
    let label_columns = block.inner(area).width;
    let grid = dashed_grid();

    let labels: Vec<((f64, f64), Line<'static>)> = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let selected = i == highlighted;
            let text = format!("{} {}", if selected { "■" } else { "□" }, category.name);
            let anchor = label_anchor(category.position, text.chars().count(), label_columns);
            let style = if selected {
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SECONDARY_COLOR)
            };
            (anchor, Line::styled(text, style))
        })
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([f64::from(PLANE_MIN), f64::from(PLANE_MAX)])
        .y_bounds([f64::from(PLANE_MIN), f64::from(PLANE_MAX)])
        .paint(|ctx| {
            ctx.draw(&Rectangle {
                x: FLOOR_INSET,
                y: FLOOR_INSET,
                width: f64::from(PLANE_MAX) - 2.0 * FLOOR_INSET,
                height: f64::from(PLANE_MAX) - 2.0 * FLOOR_INSET,
                color: GRID_COLOR,
            });
            ctx.draw(&Points {
                coords: &grid,
                color: GRID_COLOR,
            });
            for ((x, y), line) in &labels {
                ctx.print(*x, *y, line.clone());
            }
        });

    frame.render_widget(canvas, area);
}

fn render_side_panel(app: &App, frame: &mut Frame, area: Rect, category: Option<&Category>) {
    let Some(category) = category else {
        let empty = Paragraph::new("No galleries in this catalog")
            .style(Style::default().fg(MUTED_COLOR))
            .block(create_border_block("Gallery", false));
        frame.render_widget(empty, area);
        return;
    };

    let count = app.catalog.exhibits_in_category(&category.id).len();
    let noun = if count == 1 { "exhibit" } else { "exhibits" };

    let details = Paragraph::new(vec![
        Line::styled(
            category.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(category.description.clone(), Style::default().fg(MUTED_COLOR)),
        Line::default(),
        Line::from(vec![
            Span::styled(count.to_string(), Style::default().fg(SECONDARY_COLOR)),
            Span::raw(format!(" {noun}")),
        ]),
        Line::default(),
        Line::styled("Enter to visit", Style::default().fg(PRIMARY_COLOR)),
    ])
    .wrap(Wrap { trim: true })
    .block(create_border_block("Gallery", false));

    frame.render_widget(details, area);
}

/// Converts a screen-like plane position (y down) into canvas coordinates
/// (y up).
fn to_canvas(position: Position) -> (f64, f64) {
    (
        f64::from(position.x),
        f64::from(PLANE_MAX) - f64::from(position.y),
    )
}

/// Where to print a label so it is centered on its marker but never runs
/// past the right edge of a canvas `columns` cells wide.
fn label_anchor(position: Position, label_chars: usize, columns: u16) -> (f64, f64) {
    let (x, y) = to_canvas(position);
    let plane_width = f64::from(PLANE_MAX - PLANE_MIN);
    let cell = plane_width / f64::from(columns.max(2) - 1);
    let label_width = label_chars as f64 * cell;

    let max_x = (f64::from(PLANE_MAX) - label_width).max(f64::from(PLANE_MIN));
    let x = (x - label_width / 2.0).clamp(f64::from(PLANE_MIN), max_x);
    (x, y.clamp(f64::from(PLANE_MIN), f64::from(PLANE_MAX)))
}

/// Dots along the interior grid lines.
fn dashed_grid() -> Vec<(f64, f64)> {
    let start = FLOOR_INSET;
    let end = f64::from(PLANE_MAX) - FLOOR_INSET;
    let steps = ((end - start) / DASH_STEP) as usize;

    GRID_LINES
        .iter()
        .flat_map(|&line| {
            (0..=steps).flat_map(move |i| {
                let along = start + i as f64 * DASH_STEP;
                [(line, along), (along, line)]
            })
        })
        .collect()
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

    #[test]
    fn test_to_canvas_flips_y() {
        assert_eq!(to_canvas(Position::new(20.0, 30.0)), (20.0, 70.0));
        assert_eq!(to_canvas(Position::new(0.0, 100.0)), (0.0, 0.0));
    }

    #[rstest]
    #[case::centered(Position::new(50.0, 50.0), 10, 101, (45.0, 50.0))]
    #[case::left_edge(Position::new(2.0, 50.0), 10, 101, (0.0, 50.0))]
    #[case::right_edge(Position::new(98.0, 50.0), 10, 101, (90.0, 50.0))]
    #[case::out_of_plane(Position::new(50.0, 130.0), 10, 101, (45.0, 0.0))]
    fn test_label_anchor(
        #[case] position: Position,
        #[case] chars: usize,
        #[case] columns: u16,
        #[case] expected: (f64, f64),
    ) {
        let (x, y) = label_anchor(position, chars, columns);
        assert!((x - expected.0).abs() < 1e-9, "x = {x}");
        assert!((y - expected.1).abs() < 1e-9, "y = {y}");
    }

    #[test]
    fn test_dashed_grid_stays_on_floor() {
        let grid = dashed_grid();

        assert_eq!(grid.len(), GRID_LINES.len() * 41 * 2);
        assert!(grid.iter().all(|&(x, y)| {
            (FLOOR_INSET..=PLANE_MAX as f64 - FLOOR_INSET).contains(&x)
                && (FLOOR_INSET..=PLANE_MAX as f64 - FLOOR_INSET).contains(&y)
        }));
    }

    #[rstest]
    fn test_map_shows_every_category_and_highlight(
        mut map_app: App,
        mut test_terminal: Terminal<TestBackend>,
    ) {
        map_app.nav.map_index = 2;

        test_terminal
            .draw(|frame| render(&map_app, frame, frame.area()))
            .unwrap();

        let content = buffer_to_string(test_terminal.backend().buffer());
        for name in [
            "Elegant Functions",
            "Creative Algorithms",
            "Historical Snippets",
            "Minimal Wonders",
        ] {
            assert!(content.contains(name), "missing {name}");
        }
        assert_eq!(content.matches('■').count(), 1);
        assert!(content.contains("■ Historical Snippets"));
        assert!(content.contains("Code that changed the course"));
        assert!(content.contains("1 exhibit"));
    }

    #[rstest]
    fn test_narrow_map_drops_side_panel(map_app: App) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal
            .draw(|frame| render(&map_app, frame, frame.area()))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(!content.contains("Enter to visit"));
        assert!(content.contains("Museum Map"));
    }
}
