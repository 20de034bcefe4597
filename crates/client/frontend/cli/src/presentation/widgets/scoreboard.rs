//! Scoreboard widget: one line per player with per-target status.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{PlayerView, ViewModel, format};
use game_core::Animal;

/// Render the scoreboard panel.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let lines: Vec<Line> = view_model.players.iter().map(player_line).collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Scoreboard"));

    frame.render_widget(paragraph, area);
}

fn player_line(player: &PlayerView) -> Line<'_> {
    let marker = if player.is_winner {
        Span::styled("🏆 ", Style::default().fg(Color::Yellow))
    } else if player.is_current {
        Span::styled("► ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    };

    let name_style = if player.is_current || player.is_winner {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        marker,
        Span::styled(format!("{:<16}", player.name), name_style),
        Span::styled(
            format!("{:>4}  ", format::score_fraction(player.score)),
            Style::default().fg(Color::LightGreen),
        ),
    ];

    for (animal, &hit) in Animal::ALL.iter().zip(player.hits.iter()) {
        if hit {
            spans.push(Span::raw(animal.emoji()));
        } else {
            spans.push(Span::styled("· ", Style::default().fg(Color::DarkGray)));
        }
    }

    Line::from(spans)
}
