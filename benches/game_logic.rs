use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, Piece, ScriptedSource};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows with flat I pieces, two per row plus an O on the right.
            for y in (16..20).step_by(2) {
                for x in [0, 4] {
                    for dy in 0..2 {
                        let mut piece = Piece::new(PieceKind::I);
                        piece.x = x;
                        piece.y = y + dy;
                        board.place(&piece);
                    }
                }
                let mut o = Piece::new(PieceKind::O);
                o.x = 8;
                o.y = y;
                board.place(&o);
            }
            black_box(board.clear_lines())
        })
    });
}

fn bench_lock_and_spawn(c: &mut Criterion) {
    let mut state = GameState::with_source(ScriptedSource::new(PieceKind::ALL));
    state.start();

    c.bench_function("drop_to_lock", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            state.soft_drop();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            if !state.move_right() {
                while state.move_left() {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_lock_and_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
