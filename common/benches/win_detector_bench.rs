use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::tictactoe::{Board, Cell, TicTacToeGameState, check_win, check_win_with_line};

fn create_board(marks: &[(isize, isize, Cell)]) -> Board {
    let mut board = Board::default();
    for &(x, y, cell) in marks {
        board.set(x, y, cell).unwrap();
    }
    board
}

fn bench_full_game() {
    let mut state = TicTacToeGameState::new();
    let moves = [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)];
    for (x, y) in moves {
        let _ = state.place_mark(x, y);
    }
    black_box(state.status);
}

fn win_detector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("win_detector");

    let empty = Board::default();
    group.bench_function("empty_board", |b| {
        b.iter(|| check_win(black_box(&empty)))
    });

    let last_column = create_board(&[
        (2, 0, Cell::PlayerTwo), (2, 1, Cell::PlayerTwo), (2, 2, Cell::PlayerTwo),
        (0, 0, Cell::PlayerOne), (1, 1, Cell::PlayerOne),
    ]);
    group.bench_function("last_column_win", |b| {
        b.iter(|| check_win_with_line(black_box(&last_column)))
    });

    group.bench_function("full_draw_game", |b| {
        b.iter(bench_full_game)
    });

    group.finish();
}

criterion_group!(benches, win_detector_bench);
criterion_main!(benches);
