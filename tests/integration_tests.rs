//! Integration tests for the game loop: commands, gravity, scoring and game over

use blockfall::core::{DropOutcome, GameState, PieceSource, PlayerProfile, ScriptedSource};
use blockfall::types::{GameAction, GamePhase, PieceKind};

fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedSource> {
    let mut state = GameState::with_source(ScriptedSource::new(kinds.to_vec()));
    state.start();
    state
}

/// Soft-drop until the active piece locks. Returns the number of rows it fell.
fn drop_to_lock<S: PieceSource>(state: &mut GameState<S>) -> u32 {
    let mut rows = 0;
    loop {
        match state.soft_drop() {
            DropOutcome::Moved => rows += 1,
            DropOutcome::Locked => return rows,
            DropOutcome::Ignored => panic!("soft drop ignored while dropping"),
        }
    }
}

fn shift<S: PieceSource>(state: &mut GameState<S>, dx: i8) {
    for _ in 0..dx.unsigned_abs() {
        let moved = if dx < 0 {
            state.move_left()
        } else {
            state.move_right()
        };
        assert!(moved, "shift by {} blocked", dx);
    }
}

/// Stand an I piece up and drop it into `column`.
fn drop_vertical_i(state: &mut GameState<ScriptedSource>, column: i8) {
    assert!(state.rotate());
    let x = state.active().map(|p| p.x).unwrap();
    shift(state, column - x);
    drop_to_lock(state);
}

// ============== Lifecycle ==============

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), GamePhase::NotStarted);
    assert!(state.active().is_none());
    assert!(!state.move_left());
    assert_eq!(state.soft_drop(), DropOutcome::Ignored);
    assert!(!state.tick(10_000));

    assert!(state.apply_action(GameAction::Start));
    assert!(state.is_active());
    assert!(state.active().is_some());
    assert!(!state.start(), "second start is a no-op");

    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.drop_interval_ms(), 800);
}

#[test]
fn test_start_with_player() {
    let mut state = GameState::new(1);
    let player = PlayerProfile::new("  Ada ", None).unwrap();
    assert!(state.start_with(player));
    let player = state.player().unwrap();
    assert_eq!(player.name(), "Ada");
    assert_eq!(player.age(), 18);
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    a.start();
    b.start();
    for _ in 0..20 {
        assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
        drop_to_lock(&mut a);
        drop_to_lock(&mut b);
        if a.is_game_over() {
            break;
        }
    }
}

// ============== Movement ==============

#[test]
fn test_moves_stop_at_walls() {
    let mut state = scripted(&[PieceKind::O]);
    let mut left = 0;
    while state.move_left() {
        left += 1;
    }
    assert_eq!(left, 4);
    assert_eq!(state.active().unwrap().x, 0);

    let mut right = 0;
    while state.move_right() {
        right += 1;
    }
    assert_eq!(right, 8);
    assert_eq!(state.active().unwrap().x, 8);
}

#[test]
fn test_soft_drop_moves_then_locks() {
    let mut state = scripted(&[PieceKind::O]);
    assert_eq!(drop_to_lock(&mut state), 18);

    let board = state.board();
    assert!(board.is_occupied(4, 18));
    assert!(board.is_occupied(5, 19));
    assert_eq!(board.filled_count(), 4);

    // A fresh piece is waiting at the spawn point.
    let next = state.active().unwrap();
    assert_eq!((next.x, next.y), (4, 0));
}

#[test]
fn test_rotation_blocked_by_wall_is_rejected() {
    let mut state = scripted(&[PieceKind::I]);
    assert!(state.rotate());
    shift(&mut state, 6);
    assert_eq!(state.active().unwrap().x, 9);

    let before = *state.active().unwrap();
    assert!(!state.rotate(), "horizontal I does not fit at column 9");
    assert_eq!(*state.active().unwrap(), before);
}

#[test]
fn test_apply_action_dispatch() {
    let mut state = scripted(&[PieceKind::T]);
    let x = state.active().unwrap().x;

    assert!(state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active().unwrap().x, x - 1);
    assert!(state.apply_action(GameAction::MoveRight));
    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.active().unwrap().y, 1);
    assert!(state.apply_action(GameAction::Rotate));
    assert_eq!(state.active().unwrap().shape.rows(), 3);
}

// ============== Gravity ==============

#[test]
fn test_tick_accumulates_until_interval() {
    let mut state = scripted(&[PieceKind::O]);
    assert!(!state.tick(400));
    assert!(!state.tick(399));
    assert_eq!(state.active().unwrap().y, 0);
    assert_eq!(state.drop_timer_ms(), 799);

    assert!(state.tick(1));
    assert_eq!(state.active().unwrap().y, 1);
    assert_eq!(state.drop_timer_ms(), 0);
}

#[test]
fn test_single_long_tick_is_one_step() {
    let mut state = scripted(&[PieceKind::O]);
    assert!(state.tick(5_000));
    assert_eq!(state.active().unwrap().y, 1);
}

#[test]
fn test_gravity_locks_at_floor() {
    let mut state = scripted(&[PieceKind::O]);
    for _ in 0..19 {
        assert!(state.tick(800));
    }
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.active().unwrap().y, 0);
}

// ============== Scoring ==============

#[test]
fn test_single_line_clear() {
    let mut state = scripted(&[PieceKind::I, PieceKind::I, PieceKind::O]);

    shift(&mut state, -3);
    drop_to_lock(&mut state);
    shift(&mut state, 1);
    drop_to_lock(&mut state);
    assert_eq!(state.score(), 0);

    shift(&mut state, 4);
    drop_to_lock(&mut state);

    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.level(), 1);

    let event = state.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.points, 100);
    assert!(!event.leveled_up);
    assert!(state.take_last_event().is_none());

    // The top half of the O fell into the bottom row.
    let board = state.board();
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(8, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::O)));
}

#[test]
fn test_no_clear_no_score() {
    let mut state = scripted(&[PieceKind::O]);
    for _ in 0..4 {
        drop_to_lock(&mut state);
    }
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.board().filled_count(), 16);
    let event = state.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(event.points, 0);
}

#[test]
fn test_four_lines_score_linearly() {
    let mut state = scripted(&[PieceKind::I]);
    for column in 0..10 {
        drop_vertical_i(&mut state, column);
    }
    assert_eq!(state.lines(), 4);
    assert_eq!(state.score(), 400);
    assert!(state.board().is_empty());
}

#[test]
fn test_level_up_speeds_gravity() {
    let mut state = scripted(&[PieceKind::I]);
    for _ in 0..2 {
        for column in 0..10 {
            drop_vertical_i(&mut state, column);
        }
    }
    assert_eq!(state.lines(), 8);
    assert_eq!(state.level(), 1);

    for column in 0..10 {
        drop_vertical_i(&mut state, column);
    }
    assert_eq!(state.lines(), 12);
    assert_eq!(state.score(), 1200);
    assert_eq!(state.level(), 2);
    assert_eq!(state.drop_interval_ms(), 730);

    let event = state.take_last_event().unwrap();
    assert_eq!(event.level, 2);
    assert!(event.leveled_up);

    assert!(!state.tick(729));
    assert!(state.tick(1));
}

// ============== Game Over ==============

fn play_until_game_over(state: &mut GameState<ScriptedSource>) -> u32 {
    let mut locks = 0;
    while !state.is_game_over() {
        drop_to_lock(state);
        locks += 1;
        assert!(locks <= 10, "stack should top out after ten O pieces");
    }
    locks
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut state = scripted(&[PieceKind::O]);
    assert_eq!(play_until_game_over(&mut state), 10);

    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(state.active().is_none());
    assert!(state.snapshot().game_over());
}

#[test]
fn test_commands_ignored_after_game_over() {
    let mut state = scripted(&[PieceKind::O]);
    play_until_game_over(&mut state);
    let board = state.board().clone();

    assert!(!state.move_left());
    assert!(!state.move_right());
    assert!(!state.rotate());
    assert_eq!(state.soft_drop(), DropOutcome::Ignored);
    assert!(!state.tick(10_000));
    assert!(!state.apply_action(GameAction::Start));
    assert_eq!(*state.board(), board);
}

// ============== Restart ==============

#[test]
fn test_restart_after_game_over() {
    let mut state = scripted(&[PieceKind::O]);
    play_until_game_over(&mut state);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), GamePhase::Active);
    assert!(state.board().is_empty());
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.episode_id(), 1);
    assert!(state.active().is_some());
    assert!(state.move_left());
}

#[test]
fn test_restart_mid_game_resets_progress() {
    let mut state = scripted(&[PieceKind::I]);
    for column in 0..10 {
        drop_vertical_i(&mut state, column);
    }
    drop_to_lock(&mut state);
    assert_eq!(state.score(), 400);
    state.tick(300);

    state.restart();
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.drop_timer_ms(), 0);
    assert!(state.board().is_empty());
    assert!(state.take_last_event().is_none());
}

#[test]
fn test_restart_before_start_stays_not_started() {
    let mut state = GameState::new(5);
    state.restart();
    assert_eq!(state.phase(), GamePhase::NotStarted);
    assert!(state.start());
}

#[test]
fn test_restart_keeps_player() {
    let mut state = GameState::new(5);
    state.start_with(PlayerProfile::new("Mo", Some(40)).unwrap());
    state.restart();
    assert_eq!(state.player().map(|p| p.name()), Some("Mo"));
}

// ============== Snapshot ==============

#[test]
fn test_snapshot_reflects_state() {
    let mut state = scripted(&[PieceKind::O]);
    drop_to_lock(&mut state);
    let snap = state.snapshot();

    assert!(snap.playable());
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.board[19][4], 2);
    assert_eq!(snap.board[18][5], 2);
    assert_eq!(snap.board[19][0], 0);
    assert_eq!(snap.active.map(|p| p.kind), Some(PieceKind::O));
    assert_eq!(snap.level, 1);
    assert_eq!(snap.drop_interval_ms, 800);
}
