//! Command execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation flows through the same three-phase pipeline
//! (pre_validate → apply → post_validate), and the pre-command state is
//! restored on any failure, so callers never observe a partial transition.

use crate::command::{
    AddPlayer, Command, CommandTransition, ConfirmRound, NextPlayer, RemovePlayer, StartGame,
    ToggleTarget,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameState;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("add player failed: {0}")]
    AddPlayer(TransitionPhaseError<<AddPlayer as CommandTransition>::Error>),

    #[error("remove player failed: {0}")]
    RemovePlayer(TransitionPhaseError<<RemovePlayer as CommandTransition>::Error>),

    #[error("start game failed: {0}")]
    StartGame(TransitionPhaseError<<StartGame as CommandTransition>::Error>),

    #[error("toggle target failed: {0}")]
    ToggleTarget(TransitionPhaseError<<ToggleTarget as CommandTransition>::Error>),

    #[error("confirm round failed: {0}")]
    ConfirmRound(TransitionPhaseError<<ConfirmRound as CommandTransition>::Error>),

    #[error("next player failed: {0}")]
    NextPlayer(TransitionPhaseError<<NextPlayer as CommandTransition>::Error>),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AddPlayer(e) | Self::RemovePlayer(e) => e.error.severity(),
            Self::StartGame(e) => e.error.severity(),
            Self::ToggleTarget(e) | Self::ConfirmRound(e) | Self::NextPlayer(e) => {
                e.error.severity()
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AddPlayer(e) | Self::RemovePlayer(e) => e.error.error_code(),
            Self::StartGame(e) => e.error.error_code(),
            Self::ToggleTarget(e) | Self::ConfirmRound(e) | Self::NextPlayer(e) => {
                e.error.error_code()
            }
        }
    }
}

type TransitionResult<E> = Result<(), TransitionPhaseError<E>>;

macro_rules! dispatch_transition {
    ($command:expr, $reducer:expr, { $($variant:ident => $err:ident),+ $(,)? }) => {{
        match $command {
            $(
                Command::$variant(transition) => {
                    drive_transition(transition, $reducer).map_err(ExecuteError::$err)
                }
            )+
            // Reset is infallible; the empty match discharges its error type.
            Command::Reset(transition) => match drive_transition(transition, $reducer) {
                Ok(()) => Ok(()),
                Err(infallible) => match infallible.error {},
            },
        }
    }};
}

/// Game engine that owns command execution for a single [`GameState`].
///
/// All state mutations, user-triggered or lifecycle, go through the same
/// execute() pipeline.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes a command by routing it through the transition pipeline.
    ///
    /// On failure the state is rolled back to what it was before the call.
    /// On success the state nonce advances — including across a reset, so
    /// snapshots derived from an earlier state never alias a fresh one.
    pub fn execute(&mut self, command: &Command) -> Result<(), ExecuteError> {
        let before = self.state.clone();

        let result = dispatch_transition!(command, self.state, {
            AddPlayer => AddPlayer,
            RemovePlayer => RemovePlayer,
            StartGame => StartGame,
            ToggleTarget => ToggleTarget,
            ConfirmRound => ConfirmRound,
            NextPlayer => NextPlayer,
        });

        if let Err(error) = result {
            *self.state = before;
            return Err(error);
        }

        self.state.nonce = before.nonce.wrapping_add(1);
        Ok(())
    }
}

#[inline]
fn drive_transition<T>(transition: &T, state: &mut GameState) -> TransitionResult<T::Error>
where
    T: CommandTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{RosterError, StartError};
    use crate::state::Phase;

    #[test]
    fn execute_advances_the_nonce_on_success_only() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);

        engine.execute(&Command::add_player("Ana")).unwrap();
        engine
            .execute(&Command::add_player("Ana"))
            .unwrap_err();
        engine.execute(&Command::add_player("Leo")).unwrap();

        assert_eq!(state.nonce(), 2);
    }

    #[test]
    fn failed_commands_leave_no_trace() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);
        engine.execute(&Command::add_player("Ana")).unwrap();

        let snapshot = state.clone();
        let mut engine = GameEngine::new(&mut state);
        let error = engine.execute(&Command::start_game()).unwrap_err();

        assert_eq!(
            error,
            ExecuteError::StartGame(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                StartError::InsufficientPlayers {
                    required: 2,
                    actual: 1
                }
            ))
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn execute_reports_the_failing_command_and_phase() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);

        let error = engine.execute(&Command::add_player("  ")).unwrap_err();
        match error {
            ExecuteError::AddPlayer(inner) => {
                assert_eq!(inner.phase, TransitionPhase::PreValidate);
                assert_eq!(inner.error, RosterError::EmptyName);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reset_keeps_the_nonce_monotonic() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);
        engine.execute(&Command::add_player("Ana")).unwrap();
        engine.execute(&Command::add_player("Leo")).unwrap();
        engine.execute(&Command::reset()).unwrap();

        assert_eq!(state.phase(), Phase::Setup);
        assert!(state.players().is_empty());
        assert_eq!(state.nonce(), 3);
    }
}
