//! Game lifecycle commands: start and reset.

use std::convert::Infallible;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Phase};
use crate::targets::TargetSet;

use super::CommandTransition;

/// Freezes the roster and begins the first turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartGame;

impl CommandTransition for StartGame {
    type Error = StartError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.is_started() {
            return Err(StartError::AlreadyStarted);
        }
        if state.players.len() < GameConfig::MIN_PLAYERS {
            return Err(StartError::InsufficientPlayers {
                required: GameConfig::MIN_PLAYERS,
                actual: state.players.len(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        state.current = 0;
        state.turns_completed = 0;
        state.phase = Phase::Turn {
            selection: TargetSet::EMPTY,
            confirmed: false,
        };
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert!(
            state.selection().is_empty(),
            "a fresh game starts with nothing selected"
        );
        debug_assert_eq!(state.current_index(), 0);
        Ok(())
    }
}

/// Discards all players and history, returning to the initial empty state.
///
/// Valid from any phase and always succeeds; a reset of an already-initial
/// state is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reset;

impl CommandTransition for Reset {
    type Error = Infallible;

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        *state = GameState::new();
        Ok(())
    }
}

/// Errors raised when starting a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartError {
    /// Fewer players are registered than the game needs.
    #[error("at least {required} players are needed to start (have {actual})")]
    InsufficientPlayers { required: usize, actual: usize },

    /// The game has already started.
    #[error("the game has already started")]
    AlreadyStarted,
}

impl GameError for StartError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientPlayers { .. } => ErrorSeverity::Recoverable,
            Self::AlreadyStarted => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPlayers { .. } => "START_INSUFFICIENT_PLAYERS",
            Self::AlreadyStarted => "START_ALREADY_STARTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::AddPlayer;

    fn roster_of(names: &[&str]) -> GameState {
        let mut state = GameState::new();
        for name in names {
            let command = AddPlayer::new(*name);
            command.pre_validate(&state).unwrap();
            command.apply(&mut state).unwrap();
        }
        state
    }

    #[test]
    fn start_requires_two_players() {
        let state = roster_of(&["Ana"]);
        assert_eq!(
            StartGame.pre_validate(&state),
            Err(StartError::InsufficientPlayers {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn start_begins_with_the_first_player() {
        let mut state = roster_of(&["Ana", "Leo"]);
        StartGame.pre_validate(&state).unwrap();
        StartGame.apply(&mut state).unwrap();

        assert!(state.is_started());
        assert_eq!(state.current_index(), 0);
        assert!(state.selection().is_empty());
        assert_eq!(
            state.phase(),
            Phase::Turn {
                selection: TargetSet::EMPTY,
                confirmed: false
            }
        );
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut state = roster_of(&["Ana", "Leo"]);
        StartGame.apply(&mut state).unwrap();
        assert_eq!(
            StartGame.pre_validate(&state),
            Err(StartError::AlreadyStarted)
        );
    }

    #[test]
    fn reset_returns_to_the_initial_state_from_anywhere() {
        let mut state = roster_of(&["Ana", "Leo"]);
        StartGame.apply(&mut state).unwrap();

        Reset.apply(&mut state).unwrap();
        assert_eq!(state.phase(), Phase::Setup);
        assert!(state.players().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.selection().is_empty());
    }
}
