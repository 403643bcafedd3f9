use criterion::{black_box, criterion_group, criterion_main, Criterion};
use text_tetris::core::{can_place, clear_completed_lines, get_shape, Board, GameState};
use text_tetris::term::render_text;
use text_tetris::types::{GameAction, PieceKind};

fn bench_gravity_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn();

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state = GameState::new(12345);
                state.spawn();
            }
            black_box(state.gravity_step());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..20 {
                    board.set(row, col, 1);
                }
            }
            clear_completed_lines(&mut board)
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new();
    let shape = get_shape(PieceKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| can_place(black_box(&shape), black_box(10), black_box(9), &board))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn();
    state.apply_action(GameAction::SoftDrop);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply_action(GameAction::Rotate);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn();

    c.bench_function("render_text", |b| {
        b.iter(|| render_text(state.board(), state.active()))
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_line_clear,
    bench_can_place,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
