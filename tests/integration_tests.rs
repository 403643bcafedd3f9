//! Integration tests for the spawn/fall/lock cycle and the game loop

use std::time::Duration;

use text_tetris::core::{ActivePiece, GameState, Phase, TickOutcome};
use text_tetris::engine::{Exit, GameLoop, NullSink, Step, TextSink};
use text_tetris::input::{InputEvent, InputSource, ScriptedInput};
use text_tetris::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Spawning);

    assert!(state.spawn());
    assert_eq!(state.phase(), Phase::Falling);
    assert!(state.active().is_some());
    assert!(!state.is_game_over());
}

#[test]
fn test_o_piece_spawns_centered_and_stops_at_right_wall() {
    let mut state = GameState::new(1);
    assert!(state.spawn_kind(PieceKind::O));

    let active = state.active().unwrap();
    assert_eq!((active.row, active.col), (0, 9));

    let mut moves = 0;
    while state.apply_action(GameAction::MoveRight) {
        moves += 1;
    }
    let active = state.active().unwrap();
    assert_eq!(moves, 9);
    assert_eq!(active.col, 18);
    // Rightmost occupied column is 19
    assert_eq!(active.cells().map(|(_, c)| c).max(), Some(19));
    assert!(!state.apply_action(GameAction::MoveRight));
}

#[test]
fn test_left_wall_stops_movement() {
    let mut state = GameState::new(1);
    assert!(state.spawn_kind(PieceKind::T));

    while state.apply_action(GameAction::MoveLeft) {}
    assert_eq!(state.active().unwrap().col, 0);
}

#[test]
fn test_last_gap_fill_clears_exactly_one_line() {
    let mut state = GameState::new(1);
    let gap = 7usize;
    for col in 0..BOARD_WIDTH as usize {
        if col != gap {
            state.board_mut().set(19, col, 1);
        }
    }
    // Marker above the row that must shift down.
    state.board_mut().set(18, 0, 1);

    // Vertical I dropped into the gap.
    let mut piece = ActivePiece::at(PieceKind::I, 16, gap as i8);
    piece.shape = piece.shape.rotated_cw();
    state.set_active(piece);

    assert_eq!(
        state.gravity_step(),
        TickOutcome::Locked { lines_cleared: 1 }
    );
    assert_eq!(state.lines_cleared(), 1);

    let board = state.board();
    // The three I cells above the cleared row shifted down by one
    assert_eq!(board.get(19, gap as i8), Some(PieceKind::I.tag()));
    assert_eq!(board.get(18, gap as i8), Some(PieceKind::I.tag()));
    assert_eq!(board.get(17, gap as i8), Some(PieceKind::I.tag()));
    assert_eq!(board.get(16, gap as i8), Some(EMPTY));
    // Marker moved from row 18 to row 19
    assert_eq!(board.get(19, 0), Some(1));
    assert_eq!(board.get(18, 0), Some(EMPTY));
    assert!(!board.is_row_full(19));
}

#[test]
fn test_i_piece_soft_drops_to_floor_and_locks_in_place() {
    let mut state = GameState::new(1);
    assert!(state.spawn_kind(PieceKind::I));

    while state.apply_action(GameAction::SoftDrop) {}
    let active = *state.active().unwrap();
    assert_eq!(active.row, BOARD_HEIGHT as i8 - 1);
    assert_eq!(active.col, 9);

    assert_eq!(
        state.gravity_step(),
        TickOutcome::Locked { lines_cleared: 0 }
    );

    let board = state.board();
    for col in 9..13 {
        assert_eq!(board.get(19, col), Some(PieceKind::I.tag()));
    }
    assert_eq!(board.row(19).iter().filter(|&&c| c > EMPTY).count(), 4);
    assert_eq!(board.occupied_row_count(), 1);
}

#[test]
fn test_rotation_is_dropped_when_blocked() {
    let mut state = GameState::new(1);
    state.set_active(ActivePiece::at(PieceKind::I, 5, 5));
    // Block the cell the vertical I would need below the anchor.
    state.board_mut().set(6, 5, 1);

    assert!(!state.apply_action(GameAction::Rotate));
    let active = state.active().unwrap();
    assert_eq!(*active, ActivePiece::at(PieceKind::I, 5, 5));
}

#[test]
fn test_rotation_near_floor_is_refused() {
    let mut state = GameState::new(1);
    state.set_active(ActivePiece::at(PieceKind::I, 18, 0));

    // Vertical I would need rows 18..=21
    assert!(!state.apply_action(GameAction::Rotate));
    assert_eq!(state.active().unwrap().shape.rows(), 1);
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let mut state = GameState::new(1);
    state.board_mut().set(1, 10, 1);

    assert!(!state.spawn_kind(PieceKind::J));
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.gravity_step(), TickOutcome::GameOver);
    assert!(!state.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_loop_drains_all_input_before_one_gravity_step() {
    let mut state = GameState::new(1);
    state.set_active(ActivePiece::new(PieceKind::O));

    let input: ScriptedInput = [
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::SoftDrop,
    ]
    .into_iter()
    .collect();
    let mut game = GameLoop::new(state, input, NullSink).with_tick(Duration::ZERO);

    assert_eq!(game.advance().unwrap(), Step::Continue(TickOutcome::Fell));
    let active = game.state().active().unwrap();
    // Two soft drops plus one gravity step
    assert_eq!((active.row, active.col), (3, 11));

    assert_eq!(game.advance().unwrap(), Step::Continue(TickOutcome::Fell));
    assert_eq!(game.state().active().unwrap().row, 4);
}

#[test]
fn test_loop_quit_request() {
    let mut input = ScriptedInput::new();
    input.push_action(GameAction::MoveLeft);
    input.push(InputEvent::Quit);
    input.push_action(GameAction::MoveLeft);

    let mut game =
        GameLoop::new(GameState::new(3), input, TextSink::new()).with_tick(Duration::ZERO);
    assert_eq!(game.run().unwrap(), Exit::Quit);

    let (state, mut input, sink) = game.into_parts();
    assert_eq!(state.active().unwrap().col, 8);
    assert_eq!(input.len(), 1);
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(
        input.try_next().unwrap(),
        Some(InputEvent::Action(GameAction::MoveLeft))
    );
}

#[test]
fn test_loop_runs_to_game_over() {
    let mut game = GameLoop::new(GameState::new(77), ScriptedInput::new(), TextSink::new())
        .with_tick(Duration::ZERO);

    assert_eq!(game.run().unwrap(), Exit::GameOver);

    let state = game.state();
    assert!(state.is_game_over());
    assert!(state.active().is_none());
    // Pieces pile up under the spawn anchor until one no longer fits
    let board = state.board();
    let spawn_area_blocked = (0..2).any(|row| (9..13).any(|col| board.is_occupied(row, col)));
    assert!(spawn_area_blocked);
    // One frame per tick, and every lock took at least one tick
    assert!(game.sink().frames().len() as u32 >= state.pieces_locked());
}
