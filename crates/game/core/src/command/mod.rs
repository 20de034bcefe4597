//! Command domain - every mutation of the tracker state.
//!
//! Each operation is a small command struct implementing
//! [`CommandTransition`]; the engine drives commands through the
//! pre_validate → apply → post_validate pipeline and rolls back on failure,
//! so a failed command never leaves partial changes behind.
//!
//! # Module Structure
//!
//! - `roster`: player registration while the game is in setup
//! - `flow`: game lifecycle (start, reset)
//! - `turn`: target selection, round confirmation, turn advance

mod flow;
mod roster;
mod turn;

pub use flow::{Reset, StartError, StartGame};
pub use roster::{AddPlayer, RemovePlayer, RosterError};
pub use turn::{ConfirmRound, NextPlayer, ToggleTarget, TurnError};

use crate::catalog::Animal;
use crate::state::GameState;

/// Defines how a concrete command variant mutates the tracker state.
///
/// All failure detection lives in `pre_validate`; once it passes, `apply`
/// is expected to succeed. `post_validate` re-checks invariants on the
/// mutated state.
pub trait CommandTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the state directly.
    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level command enum covering every state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddPlayer(AddPlayer),
    RemovePlayer(RemovePlayer),
    StartGame(StartGame),
    ToggleTarget(ToggleTarget),
    ConfirmRound(ConfirmRound),
    NextPlayer(NextPlayer),
    Reset(Reset),
}

impl Command {
    /// Registers a player under the given (untrimmed) name.
    pub fn add_player(name: impl Into<String>) -> Self {
        Self::AddPlayer(AddPlayer::new(name))
    }

    /// Removes the player at the given roster index.
    pub fn remove_player(index: usize) -> Self {
        Self::RemovePlayer(RemovePlayer::new(index))
    }

    /// Freezes the roster and begins the first turn.
    pub fn start_game() -> Self {
        Self::StartGame(StartGame)
    }

    /// Flips a target in the current player's selection.
    pub fn toggle_target(animal: Animal) -> Self {
        Self::ToggleTarget(ToggleTarget::new(animal))
    }

    /// Locks in the current selection and scores it.
    pub fn confirm_round() -> Self {
        Self::ConfirmRound(ConfirmRound)
    }

    /// Hands the turn to the next player in roster order.
    pub fn next_player() -> Self {
        Self::NextPlayer(NextPlayer)
    }

    /// Discards all players and history.
    pub fn reset() -> Self {
        Self::Reset(Reset)
    }

    /// Returns the snake_case name of the command, used in logs.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::AddPlayer(_) => "add_player",
            Self::RemovePlayer(_) => "remove_player",
            Self::StartGame(_) => "start_game",
            Self::ToggleTarget(_) => "toggle_target",
            Self::ConfirmRound(_) => "confirm_round",
            Self::NextPlayer(_) => "next_player",
            Self::Reset(_) => "reset",
        }
    }
}

impl From<AddPlayer> for Command {
    fn from(command: AddPlayer) -> Self {
        Self::AddPlayer(command)
    }
}

impl From<RemovePlayer> for Command {
    fn from(command: RemovePlayer) -> Self {
        Self::RemovePlayer(command)
    }
}

impl From<StartGame> for Command {
    fn from(command: StartGame) -> Self {
        Self::StartGame(command)
    }
}

impl From<ToggleTarget> for Command {
    fn from(command: ToggleTarget) -> Self {
        Self::ToggleTarget(command)
    }
}

impl From<ConfirmRound> for Command {
    fn from(command: ConfirmRound) -> Self {
        Self::ConfirmRound(command)
    }
}

impl From<NextPlayer> for Command {
    fn from(command: NextPlayer) -> Self {
        Self::NextPlayer(command)
    }
}

impl From<Reset> for Command {
    fn from(command: Reset) -> Self {
        Self::Reset(command)
    }
}
