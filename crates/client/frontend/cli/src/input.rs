//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-action mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

use client_frontend_core::PhaseView;

use crate::state::{AppState, GridDirection, RosterDirection};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Append a character to the name buffer.
    TypeChar(char),
    /// Delete the last character of the name buffer.
    EraseChar,
    /// Register the typed name as a player.
    AddTypedPlayer,
    /// Remove the roster entry under the cursor.
    RemoveSelectedPlayer,
    /// Freeze the roster and start playing.
    StartGame,
    /// Move the roster selection.
    MoveRoster(RosterDirection),
    /// Move the target-grid cursor.
    MoveGrid(GridDirection),
    /// Toggle the target under the grid cursor.
    ToggleAtCursor,
    /// Lock in this turn's selection.
    ConfirmRound,
    /// Hand the turn to the next player.
    NextPlayer,
    /// Reset everything and return to setup.
    NewGame,
    /// No meaningful action was produced.
    None,
}

/// Translates `KeyEvent`s into UI actions based on the current phase.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level action.
    pub fn handle_key(&self, key: KeyEvent, phase: PhaseView, app: &AppState) -> KeyAction {
        match phase {
            PhaseView::Setup => self.handle_setup_key(key, app),
            PhaseView::Turn { .. } => self.handle_turn_key(key),
            PhaseView::Won => self.handle_won_key(key),
        }
    }

    /// Setup screen: most keys type into the name buffer.
    fn handle_setup_key(&self, key: KeyEvent, app: &AppState) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter if app.name_input.trim().is_empty() => KeyAction::StartGame,
            KeyCode::Enter => KeyAction::AddTypedPlayer,
            KeyCode::Backspace => KeyAction::EraseChar,
            KeyCode::Delete => KeyAction::RemoveSelectedPlayer,
            KeyCode::Up => KeyAction::MoveRoster(RosterDirection::Up),
            KeyCode::Down => KeyAction::MoveRoster(RosterDirection::Down),
            KeyCode::Char(ch) => KeyAction::TypeChar(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_turn_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Left => KeyAction::MoveGrid(GridDirection::Left),
            KeyCode::Right => KeyAction::MoveGrid(GridDirection::Right),
            KeyCode::Up => KeyAction::MoveGrid(GridDirection::Up),
            KeyCode::Down => KeyAction::MoveGrid(GridDirection::Down),
            KeyCode::Enter => KeyAction::ToggleAtCursor,
            KeyCode::Char(ch) => self.handle_turn_char(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_turn_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'h' | 'a' => KeyAction::MoveGrid(GridDirection::Left),
            'l' | 'd' => KeyAction::MoveGrid(GridDirection::Right),
            'k' | 'w' => KeyAction::MoveGrid(GridDirection::Up),
            'j' | 's' => KeyAction::MoveGrid(GridDirection::Down),
            ' ' => KeyAction::ToggleAtCursor,
            'c' => KeyAction::ConfirmRound,
            'n' => KeyAction::NextPlayer,
            'r' => KeyAction::NewGame,
            _ => KeyAction::None,
        }
    }

    fn handle_won_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::NewGame,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'r' => KeyAction::NewGame,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    const TURN: PhaseView = PhaseView::Turn { confirmed: false };

    #[test]
    fn setup_enter_adds_or_starts_depending_on_the_buffer() {
        let handler = InputHandler::new();
        let mut app = AppState::new();

        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), PhaseView::Setup, &app),
            KeyAction::StartGame
        );

        app.push_char('A');
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), PhaseView::Setup, &app),
            KeyAction::AddTypedPlayer
        );
    }

    #[test]
    fn setup_chars_type_into_the_buffer() {
        let handler = InputHandler::new();
        let app = AppState::new();

        // Even letters bound to game actions elsewhere are just typing here.
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), PhaseView::Setup, &app),
            KeyAction::TypeChar('q')
        );
    }

    #[test]
    fn turn_keys_map_to_grid_and_flow_actions() {
        let handler = InputHandler::new();
        let app = AppState::new();

        assert_eq!(
            handler.handle_key(key(KeyCode::Left), TURN, &app),
            KeyAction::MoveGrid(GridDirection::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), TURN, &app),
            KeyAction::ToggleAtCursor
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('C')), TURN, &app),
            KeyAction::ConfirmRound
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), TURN, &app),
            KeyAction::NextPlayer
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), TURN, &app),
            KeyAction::Quit
        );
    }

    #[test]
    fn won_screen_only_resets_or_quits() {
        let handler = InputHandler::new();
        let app = AppState::new();

        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), PhaseView::Won, &app),
            KeyAction::NewGame
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), PhaseView::Won, &app),
            KeyAction::NewGame
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c')), PhaseView::Won, &app),
            KeyAction::None
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        let app = AppState::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), TURN, &app),
            KeyAction::None
        );
    }
}
