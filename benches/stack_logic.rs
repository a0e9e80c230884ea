use criterion::{black_box, criterion_group, criterion_main, Criterion};

use joycab::core::{Board, PieceKind, StackGame};
use joycab::types::StackMove;

fn bench_tick(c: &mut Criterion) {
    let mut game = StackGame::new(12345);

    c.bench_function("game_tick_25ms", |b| {
        b.iter(|| {
            game.tick(black_box(25));
            if game.game_over() {
                game.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set_cell(col, row, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_apply_shift(c: &mut Criterion) {
    let mut game = StackGame::new(12345);

    c.bench_function("apply_shift", |b| {
        b.iter(|| {
            // Bounce between the walls so most calls actually move.
            game.apply(black_box(StackMove::Left));
            game.apply(black_box(StackMove::Right));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = PieceKind::T.spawn_shape();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| black_box(shape).rotated_cw())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = StackGame::new(12345);
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_apply_shift,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
