//! Message panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{MessageEntry, MessageLevel};

/// Render the most recent messages, oldest at the top.
pub fn render(frame: &mut Frame, area: Rect, recent: &[MessageEntry]) {
    let lines: Vec<Line> = recent
        .iter()
        .rev()
        .map(|entry| {
            let style = match entry.level {
                MessageLevel::Info => Style::default().fg(Color::Gray),
                MessageLevel::Warning => Style::default().fg(Color::Yellow),
                MessageLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(entry.text.clone(), style))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
