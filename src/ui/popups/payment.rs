//! Museum entry payment popup.
//!
//! Shows the fee offer, a spinner while the simulated processor runs, and
//! the success screen before the visitor is let in.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::constants::{ENTRY_FEE, SPINNER_FRAMES};
use crate::state::PaymentStage;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 11;

/// Renders the payment popup for `stage`. Nothing is drawn when closed.
pub fn render(frame: &mut Frame, area: Rect, stage: PaymentStage, animation_tick: u64) {
    if stage == PaymentStage::Closed {
        return;
    }

    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let block = create_popup_block("Museum Entry");
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let body = Paragraph::new(stage_lines(stage, animation_tick))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

fn stage_lines(stage: PaymentStage, animation_tick: u64) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_COLOR);

    match stage {
        PaymentStage::Closed => Vec::new(),
        PaymentStage::Offer => vec![
            Line::default(),
            Line::styled(format!("Entry fee: {ENTRY_FEE}"), muted),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "[ Pay & Enter ]",
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Enter", muted),
            ]),
            Line::default(),
            Line::styled(
                "This is a simulated payment. No actual payment will be processed.",
                muted.add_modifier(Modifier::ITALIC),
            ),
        ],
        PaymentStage::Processing => {
            let frame_index = (animation_tick % SPINNER_FRAMES.len() as u64) as usize;
            vec![
                Line::default(),
                Line::default(),
                Line::styled(SPINNER_FRAMES[frame_index], Style::default().fg(PRIMARY_COLOR)),
                Line::default(),
                Line::styled("Processing payment...", muted),
            ]
        }
        PaymentStage::Complete => vec![
            Line::default(),
            Line::default(),
            Line::styled(
                "✓",
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled("Payment successful", muted),
            Line::styled("Entering museum...", muted),
        ],
    }
}

// ============================================================================
// Tests
// ============================================================================
