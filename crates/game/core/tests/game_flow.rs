//! End-to-end exercises of the tracker rules through the engine.

use game_core::{
    Animal, Command, ErrorSeverity, ExecuteError, GameEngine, GameError, GameState, Phase,
    TargetSet, TransitionPhase,
};

fn run(state: &mut GameState, commands: &[Command]) {
    let mut engine = GameEngine::new(state);
    for command in commands {
        engine
            .execute(command)
            .unwrap_or_else(|e| panic!("{} failed: {e}", command.as_snake_case()));
    }
}

fn fail(state: &mut GameState, command: Command) -> ExecuteError {
    let before = state.clone();
    let mut engine = GameEngine::new(state);
    let error = engine.execute(&command).unwrap_err();
    assert_eq!(*state, before, "failed command must not mutate state");
    error
}

fn two_player_game() -> GameState {
    let mut state = GameState::new();
    run(
        &mut state,
        &[
            Command::add_player("Ana"),
            Command::add_player("Leo"),
            Command::start_game(),
        ],
    );
    state
}

#[test]
fn scores_equal_hit_set_sizes_after_every_command() {
    let mut state = GameState::new();
    let script = [
        Command::add_player("Ana"),
        Command::add_player("Leo"),
        Command::start_game(),
        Command::toggle_target(Animal::Penguin),
        Command::toggle_target(Animal::Sheep),
        Command::confirm_round(),
        Command::next_player(),
        Command::toggle_target(Animal::Lion),
        Command::confirm_round(),
        Command::next_player(),
    ];

    for command in &script {
        let mut engine = GameEngine::new(&mut state);
        engine.execute(command).unwrap();
        for player in state.players() {
            assert_eq!(player.score(), player.hits().len());
        }
    }
}

#[test]
fn duplicate_and_empty_names_never_change_the_roster() {
    let mut state = GameState::new();
    run(&mut state, &[Command::add_player("Ana")]);

    fail(&mut state, Command::add_player("Ana"));
    fail(&mut state, Command::add_player("   "));
    assert_eq!(state.players().len(), 1);
}

#[test]
fn start_fails_deterministically_below_two_players() {
    let mut state = GameState::new();
    let error = fail(&mut state, Command::start_game());
    assert_eq!(error.error_code(), "START_INSUFFICIENT_PLAYERS");
    assert_eq!(error.severity(), ErrorSeverity::Recoverable);

    run(&mut state, &[Command::add_player("Ana")]);
    fail(&mut state, Command::start_game());
    assert!(!state.is_started());
}

#[test]
fn starting_resets_turn_bookkeeping() {
    let state = two_player_game();
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
fn toggling_twice_has_no_net_effect() {
    let mut state = two_player_game();
    run(
        &mut state,
        &[
            Command::toggle_target(Animal::Cow),
            Command::toggle_target(Animal::Cow),
        ],
    );
    assert!(state.selection().is_empty());
}

#[test]
fn selection_stays_disjoint_from_hits_while_picking() {
    let mut state = two_player_game();
    run(
        &mut state,
        &[
            Command::toggle_target(Animal::Cat),
            Command::confirm_round(),
            Command::next_player(),
            Command::confirm_round(),
            Command::next_player(),
        ],
    );

    // Ana's turn again; the cat is already down and cannot re-enter the
    // selection.
    run(&mut state, &[Command::toggle_target(Animal::Cat)]);
    assert!(state.selection().is_empty());
    assert!(
        state
            .selection()
            .intersection(state.players()[0].hits())
            .is_empty()
    );
}

#[test]
fn confirm_unions_selection_into_hits() {
    let mut state = two_player_game();
    run(
        &mut state,
        &[
            Command::toggle_target(Animal::Penguin),
            Command::toggle_target(Animal::Sheep),
            Command::confirm_round(),
        ],
    );

    let expected: TargetSet = [Animal::Penguin, Animal::Sheep].into_iter().collect();
    assert_eq!(state.players()[0].hits(), expected);
    assert_eq!(state.players()[0].score(), 2);

    let error = fail(&mut state, Command::confirm_round());
    assert_eq!(error.error_code(), "TURN_ROUND_ALREADY_CONFIRMED");
}

#[test]
fn next_player_advances_modulo_roster_size() {
    let mut state = GameState::new();
    run(
        &mut state,
        &[
            Command::add_player("Ana"),
            Command::add_player("Leo"),
            Command::add_player("Mia"),
            Command::start_game(),
        ],
    );

    // Walk the turn to the last roster slot, then wrap.
    run(
        &mut state,
        &[
            Command::confirm_round(),
            Command::next_player(),
            Command::confirm_round(),
            Command::next_player(),
        ],
    );
    assert_eq!(state.current_index(), 2);

    run(
        &mut state,
        &[Command::confirm_round(), Command::next_player()],
    );
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.round(), 2);
}

#[test]
fn roster_is_frozen_once_started() {
    let mut state = two_player_game();
    let error = fail(&mut state, Command::add_player("Mia"));
    assert_eq!(error.error_code(), "ROSTER_ALREADY_STARTED");
    let error = fail(&mut state, Command::remove_player(0));
    assert_eq!(error.error_code(), "ROSTER_ALREADY_STARTED");
}

#[test]
fn full_hit_set_wins_and_blocks_everything_but_reset() {
    let mut state = two_player_game();
    let select_all: Vec<Command> = TargetSet::ALL.iter().map(Command::toggle_target).collect();
    run(&mut state, &select_all);
    run(&mut state, &[Command::confirm_round()]);

    assert_eq!(state.phase(), Phase::Won { winner: 0 });
    assert_eq!(state.winner().unwrap().score(), 8);

    fail(&mut state, Command::toggle_target(Animal::Pig));
    fail(&mut state, Command::next_player());
    fail(&mut state, Command::confirm_round());

    run(&mut state, &[Command::reset()]);
    assert_eq!(state.phase(), Phase::Setup);
}

#[test]
fn ana_and_leo_scenario() {
    let mut state = two_player_game();
    run(
        &mut state,
        &[
            Command::toggle_target(Animal::from_index(0).unwrap()),
            Command::toggle_target(Animal::from_index(3).unwrap()),
            Command::confirm_round(),
        ],
    );

    assert_eq!(state.players()[0].score(), 2);
    assert!(matches!(
        state.phase(),
        Phase::Turn {
            confirmed: true,
            ..
        }
    ));

    run(&mut state, &[Command::next_player()]);
    assert_eq!(state.current_index(), 1);
    assert!(state.selection().is_empty());
    assert!(matches!(
        state.phase(),
        Phase::Turn {
            confirmed: false,
            ..
        }
    ));
}

#[test]
fn last_remaining_target_completes_the_sweep() {
    let mut state = two_player_game();

    // Ana downs seven targets over her first turn.
    let first_seven: Vec<Command> = TargetSet::ALL
        .iter()
        .take(7)
        .map(Command::toggle_target)
        .collect();
    run(&mut state, &first_seven);
    run(
        &mut state,
        &[
            Command::confirm_round(),
            Command::next_player(),
            Command::confirm_round(),
            Command::next_player(),
        ],
    );
    assert_eq!(state.players()[0].score(), 7);

    // Her next turn: only the cow is left standing.
    run(
        &mut state,
        &[Command::toggle_target(Animal::Cow), Command::confirm_round()],
    );
    assert_eq!(state.phase(), Phase::Won { winner: 0 });
    assert_eq!(state.winner().unwrap().score(), 8);
}

#[test]
fn reset_recovers_the_initial_state_from_any_phase() {
    // From setup.
    let mut state = GameState::new();
    run(&mut state, &[Command::add_player("Ana"), Command::reset()]);
    assert_eq!(state, {
        let mut fresh = GameState::new();
        let mut engine = GameEngine::new(&mut fresh);
        engine.execute(&Command::add_player("x")).unwrap();
        engine.execute(&Command::reset()).unwrap();
        fresh
    });

    // From a confirmed mid-game turn.
    let mut state = two_player_game();
    run(
        &mut state,
        &[
            Command::toggle_target(Animal::Lion),
            Command::confirm_round(),
            Command::reset(),
        ],
    );
    assert_eq!(state.phase(), Phase::Setup);
    assert!(state.players().is_empty());
    assert_eq!(state.current_index(), 0);
    assert!(state.selection().is_empty());
}

#[test]
fn guards_report_the_failing_phase() {
    let mut state = GameState::new();
    let error = fail(&mut state, Command::toggle_target(Animal::Pig));
    match error {
        ExecuteError::ToggleTarget(inner) => {
            assert_eq!(inner.phase, TransitionPhase::PreValidate);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
