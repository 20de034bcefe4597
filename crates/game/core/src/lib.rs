//! Deterministic rules for the animal-target turn tracker.
//!
//! `game-core` defines the canonical game rules (roster management, turn
//! flow, scoring, win detection) and exposes pure APIs with no I/O. All
//! state mutation flows through [`engine::GameEngine`], and frontends read
//! the types re-exported here.
pub mod catalog;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod targets;

pub use catalog::Animal;
pub use command::{
    AddPlayer, Command, CommandTransition, ConfirmRound, NextPlayer, RemovePlayer, Reset,
    RosterError, StartError, StartGame, ToggleTarget, TurnError,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use state::{GameState, Phase, Player};
pub use targets::TargetSet;
