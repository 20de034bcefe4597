//! Header widget displaying the turn in progress.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{PhaseView, ViewModel, format};

/// Render the header panel: round, current player, score, selection state.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let Some(turn) = &view_model.turn else {
        return;
    };

    let status = if view_model.phase == PhaseView::Won {
        " [GAME OVER]"
    } else if turn.confirmed {
        " [ROUND CONFIRMED]"
    } else {
        ""
    };

    let text = vec![Line::from(vec![
        Span::raw("Round: "),
        Span::styled(turn.round.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Up: "),
        Span::styled(
            turn.player_name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format::score_fraction(turn.score),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw(" | Selected: "),
        Span::styled(
            turn.selected_count.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            status,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Game"));

    frame.render_widget(paragraph, area);
}
