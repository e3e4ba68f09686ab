use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use minesweeper_alpha_core::*;

/// Ten by ten board with a diagonal of mines, all flagged and all safe cells revealed.
fn solved_board() -> Board {
    let mines: Vec<Coord2> = (0..10).map(|i| (i, i)).collect();
    let mut board = Board::new(BoardConfig::new_unchecked((10, 10), 10), &mines).unwrap();
    for row in 0..10i64 {
        for col in 0..10i64 {
            if row == col {
                board.mark((row, col)).unwrap();
            } else {
                board.reveal((row, col)).unwrap();
            }
        }
    }
    board
}

fn bench_board(c: &mut Criterion) {
    let board = solved_board();
    let mut group = c.benchmark_group("board");

    group.bench_function("is_won", |b| b.iter(|| black_box(&board).is_won()));
    group.bench_function("render_no_fog", |b| b.iter(|| black_box(&board).render(true)));
    group.bench_function("parse_seed", |b| {
        b.iter(|| Seed::parse(black_box("10 10 3\n0 0\n5 5\n9 9\n")))
    });

    group.finish();
}

criterion_group!(benches, bench_board);
criterion_main!(benches);
