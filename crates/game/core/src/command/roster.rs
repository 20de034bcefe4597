//! Roster commands: player registration while the game is in setup.

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Phase, Player};

use super::CommandTransition;

/// Registers a new player at the end of the turn order.
///
/// The stored name is the input with surrounding whitespace stripped; names
/// must be unique among players (case-sensitive exact match).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddPlayer {
    name: String,
}

impl AddPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn trimmed(&self) -> &str {
        self.name.trim()
    }
}

impl CommandTransition for AddPlayer {
    type Error = RosterError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !matches!(state.phase, Phase::Setup) {
            return Err(RosterError::AlreadyStarted);
        }

        let name = self.trimmed();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if state.players.iter().any(|player| player.name() == name) {
            return Err(RosterError::DuplicateName {
                name: name.to_owned(),
            });
        }
        if state.players.len() >= GameConfig::MAX_PLAYERS {
            return Err(RosterError::RosterFull {
                max: GameConfig::MAX_PLAYERS,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        state.players.push(Player::new(self.trimmed()));
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert_eq!(
            state
                .players
                .iter()
                .map(Player::name)
                .collect::<HashSet<_>>()
                .len(),
            state.players.len(),
            "player names must stay unique"
        );
        Ok(())
    }
}

/// Removes the player at a roster index, preserving the order of the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovePlayer {
    index: usize,
}

impl RemovePlayer {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl CommandTransition for RemovePlayer {
    type Error = RosterError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !matches!(state.phase, Phase::Setup) {
            return Err(RosterError::AlreadyStarted);
        }
        if self.index >= state.players.len() {
            return Err(RosterError::IndexOutOfRange {
                index: self.index,
                len: state.players.len(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        state.players.remove(self.index);
        Ok(())
    }
}

/// Errors raised by roster commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    /// Name was empty after trimming.
    #[error("player name must not be empty")]
    EmptyName,

    /// Another player already uses this exact name.
    #[error("player \"{name}\" is already registered")]
    DuplicateName { name: String },

    /// The roster is at capacity.
    #[error("the roster is full (max: {max})")]
    RosterFull { max: usize },

    /// Index does not refer to a registered player.
    #[error("no player at index {index} (roster size: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The roster is frozen once the game has started.
    #[error("the roster cannot change after the game has started")]
    AlreadyStarted,
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyName | Self::DuplicateName { .. } | Self::RosterFull { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::IndexOutOfRange { .. } | Self::AlreadyStarted => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "ROSTER_EMPTY_NAME",
            Self::DuplicateName { .. } => "ROSTER_DUPLICATE_NAME",
            Self::RosterFull { .. } => "ROSTER_FULL",
            Self::IndexOutOfRange { .. } => "ROSTER_INDEX_OUT_OF_RANGE",
            Self::AlreadyStarted => "ROSTER_ALREADY_STARTED",
        }
    }
}
