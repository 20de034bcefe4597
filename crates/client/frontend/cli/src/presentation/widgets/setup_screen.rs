//! Setup screen widget for building the roster.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use client_frontend_core::ViewModel;
use game_core::GameConfig;

use crate::state::AppState;

/// Renders the full-screen setup view: title, name input, roster, footer.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Length(3), // Name input
            Constraint::Min(0),    // Roster
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_name_input(frame, chunks[1], app_state);
    render_roster(frame, chunks[2], view_model, app_state);
    render_footer(frame, chunks[3], view_model);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "FIELD TALLY",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Hit all 8 animal targets",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_name_input(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(app_state.name_input.as_str()),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Player Name "),
    );

    frame.render_widget(input, area);
}

fn render_roster(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let items: Vec<ListItem> = view_model
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let is_selected = index == app_state.roster_cursor;
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    player.name.clone(),
                    if is_selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Players ({}/{}) ",
        view_model.players.len(),
        GameConfig::MAX_PLAYERS
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let ready = view_model.players.len() >= GameConfig::MIN_PLAYERS;
    let start_hint = if ready {
        Span::styled(" Start  ", Style::default().fg(Color::LightGreen))
    } else {
        Span::styled(
            format!(" Start (need {}+)  ", GameConfig::MIN_PLAYERS),
            Style::default().fg(Color::DarkGray),
        )
    };

    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Add  ", Style::default().fg(Color::Gray)),
            Span::styled("Enter (empty)", Style::default().fg(Color::Yellow)),
            start_hint,
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::styled(" Select  ", Style::default().fg(Color::Gray)),
            Span::styled("Del", Style::default().fg(Color::Yellow)),
            Span::styled(" Remove  ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
