//! Glue code tying the game engine, input handling, and terminal UI together.
//!
//! `CliApp` is the composition root: it owns the single authoritative
//! `GameState` and threads it explicitly through the engine, the view
//! model, and the renderer. Every command runs to completion before the
//! next key event is read.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use client_frontend_core::{FrontendConfig, MessageLog, ViewModel, format};
use game_core::{Animal, Command, GameConfig, GameEngine, GameError, GameState};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{
    terminal::{self, Tui},
    ui::{self, RenderContext},
};
use crate::state::AppState;

pub struct CliApp {
    config: CliConfig,
    state: GameState,
    view_model: ViewModel,
    messages: MessageLog,
    app_state: AppState,
    input: InputHandler,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Self {
        let frontend_config = FrontendConfig::default();
        let state = GameState::new();
        let view_model = ViewModel::from_state(&state);

        Self {
            config,
            state,
            view_model,
            messages: MessageLog::new(frontend_config.messages.capacity),
            app_state: AppState::new(),
            input: InputHandler::new(),
        }
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!("CLI client starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        self.messages.push_info(format!(
            "Welcome! Add {} to {} players, then press Enter on an empty name to start.",
            GameConfig::MIN_PLAYERS,
            GameConfig::MAX_PLAYERS,
        ));

        loop {
            self.render(&mut terminal)?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                }
                // Resizes redraw on the next loop iteration.
                _ => {}
            }
        }

        terminal::restore()?;
        tracing::info!("CLI client exiting");
        Ok(())
    }

    /// Handle one key press; returns true when the user quits.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = self
            .input
            .handle_key(key, self.view_model.phase, &self.app_state);

        match action {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                return true;
            }
            KeyAction::TypeChar(ch) => self.app_state.push_char(ch),
            KeyAction::EraseChar => self.app_state.pop_char(),
            KeyAction::AddTypedPlayer => {
                let name = self.app_state.name_input.clone();
                if self.execute(Command::add_player(name)) {
                    self.app_state.name_input.clear();
                    self.app_state.roster_cursor = self.view_model.players.len().saturating_sub(1);
                }
            }
            KeyAction::RemoveSelectedPlayer => {
                if !self.view_model.players.is_empty() {
                    let index = self.app_state.roster_cursor;
                    if self.execute(Command::remove_player(index)) {
                        self.app_state
                            .clamp_roster_cursor(self.view_model.players.len());
                    }
                }
            }
            KeyAction::StartGame => {
                if self.execute(Command::start_game()) {
                    self.app_state.reset_cursors();
                    let up = self.current_player_name();
                    self.messages.push_info(format!("Game on! {up} shoots first."));
                }
            }
            KeyAction::MoveRoster(direction) => {
                let roster_len = self.view_model.players.len();
                self.app_state.move_roster_cursor(direction, roster_len);
            }
            KeyAction::MoveGrid(direction) => self.app_state.move_grid_cursor(direction),
            KeyAction::ToggleAtCursor => {
                if let Some(animal) = Animal::from_index(self.app_state.grid_cursor as u8) {
                    self.execute(Command::toggle_target(animal));
                }
            }
            KeyAction::ConfirmRound => {
                if self.execute(Command::confirm_round()) {
                    self.report_confirm_outcome();
                }
            }
            KeyAction::NextPlayer => {
                if self.execute(Command::next_player()) {
                    self.app_state.grid_cursor = 0;
                    let up = self.current_player_name();
                    self.messages.push_info(format!("{up} is up."));
                }
            }
            KeyAction::NewGame => {
                if self.execute(Command::reset()) {
                    self.app_state.reset_cursors();
                    self.messages.push_info("New game: roster cleared.");
                }
            }
            KeyAction::None => {}
        }

        false
    }

    /// Executes a command against the authoritative state and rebuilds the
    /// view model on success; failures land in the message log.
    fn execute(&mut self, command: Command) -> bool {
        let mut engine = GameEngine::new(&mut self.state);
        match engine.execute(&command) {
            Ok(()) => {
                tracing::debug!(
                    command = command.as_snake_case(),
                    nonce = self.state.nonce(),
                    "command applied"
                );
                self.view_model.rebuild_from_state(&self.state);
                true
            }
            Err(error) => {
                tracing::warn!(
                    command = command.as_snake_case(),
                    code = error.error_code(),
                    "command rejected: {error}"
                );
                self.messages.push_failure(&error);
                false
            }
        }
    }

    fn report_confirm_outcome(&mut self) {
        match self.view_model.winner() {
            Some(winner) => {
                tracing::info!(winner = %winner.name, "game won");
                self.messages.push_info(format!(
                    "{} hit all {} animal targets!",
                    winner.name,
                    GameConfig::TARGET_COUNT
                ));
            }
            None => {
                if let Some(turn) = &self.view_model.turn {
                    self.messages.push_info(format!(
                        "Round confirmed: {} at {}.",
                        turn.player_name,
                        format::score_fraction(turn.score)
                    ));
                }
            }
        }
    }

    fn current_player_name(&self) -> String {
        self.view_model
            .turn
            .as_ref()
            .map(|turn| turn.player_name.clone())
            .unwrap_or_default()
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            view_model: &self.view_model,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.config.ui.message_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}
