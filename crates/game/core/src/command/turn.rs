//! Turn commands: target selection, round confirmation, turn advance.

use crate::catalog::Animal;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Phase};
use crate::targets::TargetSet;

use super::CommandTransition;

/// Rejects commands issued outside an active game.
fn guard_active(state: &GameState) -> Result<(), TurnError> {
    match state.phase {
        Phase::Setup => Err(TurnError::NotStarted),
        Phase::Won { .. } => Err(TurnError::GameOver),
        Phase::Turn { .. } => Ok(()),
    }
}

/// Flips a target in the current player's selection.
///
/// Targets the current player has already knocked down are untouchable;
/// toggling one is a quiet no-op rather than an error, matching the
/// forgiving behavior of the physical scoresheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleTarget {
    animal: Animal,
}

impl ToggleTarget {
    pub fn new(animal: Animal) -> Self {
        Self { animal }
    }

    pub fn animal(&self) -> Animal {
        self.animal
    }
}

impl CommandTransition for ToggleTarget {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        guard_active(state)
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        if state.players[state.current].hits().contains(self.animal) {
            return Ok(());
        }
        if let Phase::Turn { selection, .. } = &mut state.phase {
            selection.toggle(self.animal);
        }
        Ok(())
    }
}

/// Locks in the current selection, scoring it for the current player.
///
/// An empty selection is a legal "pass". If the merge completes the hit
/// set, the game ends immediately in favor of the current player; otherwise
/// the round is marked confirmed and the selection stays visible until the
/// turn advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfirmRound;

impl CommandTransition for ConfirmRound {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        guard_active(state)?;
        if matches!(state.phase, Phase::Turn { confirmed: true, .. }) {
            return Err(TurnError::RoundAlreadyConfirmed);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        let selection = state.selection();
        let current = state.current;
        state.players[current].record_hits(selection);

        if state.players[current].has_won() {
            state.phase = Phase::Won { winner: current };
        } else if let Phase::Turn { confirmed, .. } = &mut state.phase {
            *confirmed = true;
        }
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert!(
            matches!(
                state.phase,
                Phase::Turn {
                    confirmed: true,
                    ..
                } | Phase::Won { .. }
            ),
            "confirm must either lock the round or end the game"
        );
        Ok(())
    }
}

/// Hands the turn to the next player in roster order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NextPlayer;

impl CommandTransition for NextPlayer {
    type Error = TurnError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        guard_active(state)?;
        if matches!(
            state.phase,
            Phase::Turn {
                confirmed: false,
                ..
            }
        ) {
            return Err(TurnError::RoundNotConfirmed);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        state.current = (state.current + 1) % state.players.len();
        state.turns_completed += 1;
        state.phase = Phase::Turn {
            selection: TargetSet::EMPTY,
            confirmed: false,
        };
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert!(
            state.current < state.players.len(),
            "current player index stays in range"
        );
        Ok(())
    }
}

/// Errors raised by turn commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// The game has not started yet.
    #[error("the game has not started yet")]
    NotStarted,

    /// The game has been won; only a reset continues from here.
    #[error("the game is over; start a new game to continue")]
    GameOver,

    /// This round was already confirmed.
    #[error("this round was already confirmed")]
    RoundAlreadyConfirmed,

    /// The round must be confirmed before the turn can advance.
    #[error("confirm the round before advancing the turn")]
    RoundNotConfirmed,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "TURN_NOT_STARTED",
            Self::GameOver => "TURN_GAME_OVER",
            Self::RoundAlreadyConfirmed => "TURN_ROUND_ALREADY_CONFIRMED",
            Self::RoundNotConfirmed => "TURN_ROUND_NOT_CONFIRMED",
        }
    }
}
