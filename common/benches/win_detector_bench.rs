use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::tictactoe::{check_win_with_line, evaluate, Board, Mark, TicTacToeGameState};

fn draw_board() -> Board {
    Board::from_cells([
        Mark::X, Mark::O, Mark::X,
        Mark::X, Mark::O, Mark::O,
        Mark::O, Mark::X, Mark::X,
    ])
}

fn anti_diagonal_board() -> Board {
    Board::from_cells([
        Mark::X, Mark::X, Mark::O,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::O, Mark::Empty, Mark::X,
    ])
}

fn bench_full_game() {
    let mut state = TicTacToeGameState::new();
    for index in [0, 1, 2, 4, 7, 3, 5, 8, 6] {
        if let Ok(transition) = state.attempt_move(index) {
            state = transition.state;
        }
    }
    black_box(state.reset_game());
}

fn win_detector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("win_detector");

    let draw = draw_board();
    let anti_diagonal = anti_diagonal_board();

    group.bench_function("evaluate_draw", |b| {
        b.iter(|| evaluate(black_box(&draw)))
    });

    group.bench_function("last_line_win", |b| {
        b.iter(|| check_win_with_line(black_box(&anti_diagonal)))
    });

    group.bench_function("full_game", |b| {
        b.iter(bench_full_game)
    });

    group.finish();
}

criterion_group!(benches, win_detector_bench);
criterion_main!(benches);
