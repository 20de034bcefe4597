//! UI rendering entry point.
//!
//! Routes rendering by phase: the setup screen replaces the whole frame,
//! the game UI stacks the standard panels, and the winner overlay is drawn
//! as a modal on top of the final board.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use client_frontend_core::{MessageLog, PhaseView, ViewModel};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppState;

/// Rendering context containing everything needed to draw a frame.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render one frame of the terminal UI.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        if ctx.view_model.phase == PhaseView::Setup {
            widgets::setup_screen::render(frame, frame.area(), ctx.view_model, ctx.app_state);
            return;
        }

        render_game_ui(frame, ctx);

        if ctx.view_model.phase == PhaseView::Won {
            let area = centered_rect(60, 40, frame.area());
            widgets::winner::render(frame, area, ctx.view_model);
        }
    })?;

    Ok(())
}

/// Render the standard game UI (header, target grid, scoreboard, messages,
/// footer).
fn render_game_ui(frame: &mut ratatui::Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(8),                        // Target grid
            Constraint::Min(0),                           // Scoreboard
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(2),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model);
    widgets::target_grid::render(frame, chunks[1], ctx.view_model, ctx.app_state);
    widgets::scoreboard::render(frame, chunks[2], ctx.view_model);

    let recent_messages: Vec<_> = ctx
        .messages
        .recent(ctx.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, chunks[3], &recent_messages);

    widgets::footer::render(frame, chunks[4], ctx.view_model.phase);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    r: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
