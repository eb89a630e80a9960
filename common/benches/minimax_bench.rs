use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::game::{choose_move, Board, Side};

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut side = Side::X;

    while !board.outcome().is_terminal() {
        match choose_move(&board, side) {
            Ok(index) => {
                if board.place(index, side).is_err() {
                    break;
                }
                side = side.opponent();
            }
            Err(_) => break,
        }
    }
}

fn bench_single_move(board: &Board, side: Side) {
    let _ = black_box(choose_move(black_box(board), side));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    let empty = Board::new();
    let reply: Board = "....X....".parse().unwrap();
    let mid_game: Board = "X.O|.X.|O..".parse().unwrap();

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.bench_function("single_move_empty", |b| {
        b.iter(|| bench_single_move(&empty, Side::X))
    });

    group.bench_function("single_move_reply", |b| {
        b.iter(|| bench_single_move(&reply, Side::O))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_single_move(&mid_game, Side::X))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
