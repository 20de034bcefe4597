//! Winner overlay: modal announcing the game result.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use client_frontend_core::ViewModel;
use game_core::GameConfig;

/// Render the winner modal over the final board.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let Some(winner) = view_model.winner() else {
        return;
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "🏆 WINNER 🏆",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!(
                "{} wins! They hit all {} animal targets!",
                winner.name,
                GameConfig::TARGET_COUNT
            ),
            Style::default().fg(Color::White),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter/r", Style::default().fg(Color::Yellow)),
            Span::styled(" New game  ", Style::default().fg(Color::Gray)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::Gray)),
        ]),
    ];

    let modal = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Game Over ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}
