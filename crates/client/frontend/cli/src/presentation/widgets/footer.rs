//! Footer widget with key hints for the current phase.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::PhaseView;

/// Render the key-hint footer.
pub fn render(frame: &mut Frame, area: Rect, phase: PhaseView) {
    let hints: &[(&str, &str)] = match phase {
        PhaseView::Setup => &[("Enter", "Add"), ("Esc", "Quit")],
        PhaseView::Turn { confirmed: false } => &[
            ("←↑↓→", "Move"),
            ("Space", "Pick"),
            ("c", "Confirm"),
            ("r", "New game"),
            ("q", "Quit"),
        ],
        PhaseView::Turn { confirmed: true } => &[
            ("n", "Next player"),
            ("r", "New game"),
            ("q", "Quit"),
        ],
        PhaseView::Won => &[("Enter/r", "New game"), ("q", "Quit")],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::Gray),
        ));
    }

    let footer = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
