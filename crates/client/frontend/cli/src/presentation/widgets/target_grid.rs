//! Target grid widget: the eight animal sticks for the current player.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{TargetView, ViewModel};

use crate::state::AppState;

/// Render the 4x2 target grid with hit/selected/cursor styling.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    if view_model.targets.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cols = AppState::GRID_COLS;
    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(*row_area);

        for (col_index, cell_area) in cells.iter().enumerate() {
            let index = row_index * cols + col_index;
            let Some(target) = view_model.targets.get(index) else {
                continue;
            };
            render_cell(frame, *cell_area, target, index == app_state.grid_cursor);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, target: &TargetView, under_cursor: bool) {
    let (name_style, marker) = if target.hit {
        (
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            " ✔",
        )
    } else if target.selected {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            " ●",
        )
    } else {
        (Style::default().fg(Color::White), "")
    };

    let border_style = if under_cursor {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if target.hit {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text = vec![Line::from(vec![
        Span::raw(target.animal.emoji()),
        Span::raw(" "),
        Span::styled(target.animal.to_string(), name_style),
        Span::styled(marker, name_style),
    ])];

    let cell = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(cell, area);
}
