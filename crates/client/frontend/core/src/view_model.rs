//! Presentation snapshot derived from the game state.
//!
//! The view model is rebuilt after every successful command and handed to
//! widgets read-only; rendering never reaches back into [`GameState`].

use game_core::{Animal, GameConfig, GameState, Phase, TargetSet};

/// Lifecycle phase as the UI sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseView {
    /// Collecting players.
    Setup,
    /// A turn is in progress.
    Turn { confirmed: bool },
    /// Somebody hit all eight targets.
    Won,
}

/// One roster entry on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub score: usize,
    /// Hit flag per catalog position.
    pub hits: [bool; GameConfig::TARGET_COUNT],
    pub is_current: bool,
    pub is_winner: bool,
}

/// One cell of the target grid, from the current player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetView {
    pub animal: Animal,
    /// Already knocked down by the current player (unselectable).
    pub hit: bool,
    /// Picked this turn.
    pub selected: bool,
}

/// Header data for the turn in progress (or just won).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnView {
    pub player_name: String,
    pub score: usize,
    pub selected_count: usize,
    pub confirmed: bool,
    pub round: u32,
}

/// Stateful view model owned by the event loop.
///
/// Rebuilt from the authoritative state after every successful command;
/// `last_sync_nonce` lets callers verify a snapshot is not stale.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub phase: PhaseView,
    pub players: Vec<PlayerView>,
    /// Target grid for the current player; empty during setup.
    pub targets: Vec<TargetView>,
    /// Present once the game has started.
    pub turn: Option<TurnView>,
    pub last_sync_nonce: u64,
}

impl ViewModel {
    /// Derives a fresh view model from the authoritative state.
    pub fn from_state(state: &GameState) -> Self {
        let started = state.is_started();
        let current = state.current_index();
        let winner_index = match state.phase() {
            Phase::Won { winner } => Some(winner),
            _ => None,
        };

        let players = state
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| PlayerView {
                name: player.name().to_owned(),
                score: player.score(),
                hits: hit_flags(player.hits()),
                is_current: started && index == current,
                is_winner: winner_index == Some(index),
            })
            .collect();

        let selection = state.selection();
        let targets = match state.current_player() {
            Some(player) => Animal::ALL
                .iter()
                .map(|&animal| TargetView {
                    animal,
                    hit: player.hits().contains(animal),
                    selected: selection.contains(animal),
                })
                .collect(),
            None => Vec::new(),
        };

        let turn = state.current_player().map(|player| TurnView {
            player_name: player.name().to_owned(),
            score: player.score(),
            selected_count: selection.len(),
            confirmed: matches!(state.phase(), Phase::Turn { confirmed: true, .. }),
            round: state.round(),
        });

        let phase = match state.phase() {
            Phase::Setup => PhaseView::Setup,
            Phase::Turn { confirmed, .. } => PhaseView::Turn { confirmed },
            Phase::Won { .. } => PhaseView::Won,
        };

        let view_model = Self {
            phase,
            players,
            targets,
            turn,
            last_sync_nonce: state.nonce(),
        };

        #[cfg(debug_assertions)]
        view_model.validate_invariants();

        view_model
    }

    /// Full rebuild in place after a state transition.
    pub fn rebuild_from_state(&mut self, state: &GameState) {
        *self = Self::from_state(state);
    }

    /// Check whether this view model matches the given state.
    pub fn is_synced(&self, state: &GameState) -> bool {
        self.last_sync_nonce == state.nonce()
    }

    /// The winning player's view, once the game has been won.
    pub fn winner(&self) -> Option<&PlayerView> {
        self.players.iter().find(|player| player.is_winner)
    }

    /// Validate view-model invariants (debug builds only).
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert!(
            self.players.iter().filter(|p| p.is_current).count() <= 1,
            "at most one player can be current"
        );
        debug_assert!(
            self.players.iter().filter(|p| p.is_winner).count() <= 1,
            "at most one player can be the winner"
        );
        debug_assert!(
            self.targets.is_empty() || self.targets.len() == GameConfig::TARGET_COUNT,
            "the target grid is all-or-nothing"
        );
    }
}

fn hit_flags(hits: TargetSet) -> [bool; GameConfig::TARGET_COUNT] {
    let mut flags = [false; GameConfig::TARGET_COUNT];
    for animal in hits.iter() {
        flags[animal.index() as usize] = true;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Command, GameEngine};

    fn play(commands: &[Command]) -> GameState {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);
        for command in commands {
            engine.execute(command).unwrap();
        }
        state
    }

    #[test]
    fn setup_shows_the_roster_and_no_grid() {
        let state = play(&[Command::add_player("Ana"), Command::add_player("Leo")]);
        let vm = ViewModel::from_state(&state);

        assert_eq!(vm.phase, PhaseView::Setup);
        assert_eq!(vm.players.len(), 2);
        assert!(vm.targets.is_empty());
        assert!(vm.turn.is_none());
        assert!(vm.players.iter().all(|p| !p.is_current && !p.is_winner));
    }

    #[test]
    fn grid_reflects_hits_and_selection() {
        let state = play(&[
            Command::add_player("Ana"),
            Command::add_player("Leo"),
            Command::start_game(),
            Command::toggle_target(Animal::Pig),
        ]);
        let vm = ViewModel::from_state(&state);

        assert_eq!(vm.targets.len(), 8);
        let pig = &vm.targets[Animal::Pig.index() as usize];
        assert!(pig.selected && !pig.hit);

        let turn = vm.turn.as_ref().unwrap();
        assert_eq!(turn.player_name, "Ana");
        assert_eq!(turn.selected_count, 1);
        assert!(!turn.confirmed);
        assert_eq!(turn.round, 1);
    }

    #[test]
    fn winner_is_flagged_on_the_scoreboard() {
        let mut commands = vec![
            Command::add_player("Ana"),
            Command::add_player("Leo"),
            Command::start_game(),
        ];
        commands.extend(Animal::ALL.iter().map(|&a| Command::toggle_target(a)));
        commands.push(Command::confirm_round());

        let state = play(&commands);
        let vm = ViewModel::from_state(&state);

        assert_eq!(vm.phase, PhaseView::Won);
        let winner = vm.winner().unwrap();
        assert_eq!(winner.name, "Ana");
        assert_eq!(winner.score, 8);
        assert!(winner.hits.iter().all(|&hit| hit));
    }

    #[test]
    fn sync_check_tracks_the_state_nonce() {
        let mut state = play(&[Command::add_player("Ana")]);
        let vm = ViewModel::from_state(&state);
        assert!(vm.is_synced(&state));

        let mut engine = GameEngine::new(&mut state);
        engine.execute(&Command::add_player("Leo")).unwrap();
        assert!(!vm.is_synced(&state));
    }
}
