use std::str::FromStr;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use noughts::player::{AlphaBetaAi, HeuristicAi, MinMaxAi};
use noughts::{Board, PlayerMark, Strategy};

fn opening_move<S: Strategy>(mut ai: S) {
    let mut board = Board::new();
    black_box(ai.choose_move(&mut board, PlayerMark::A).unwrap());
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search-ttt");
    group.measurement_time(Duration::from_secs(15));
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(10);
    group.bench_function("minimax-opening", |b| b.iter(|| opening_move(MinMaxAi::new())));
    group.bench_function("alphabeta-opening", |b| {
        b.iter(|| opening_move(AlphaBetaAi::new()))
    });
    group.sample_size(300);
    let midgame = Board::from_str("A__ _B_ __A").unwrap();
    group.bench_function("heuristic-midgame", |b| {
        let mut ai = HeuristicAi::new(123);
        b.iter(|| {
            let mut board = midgame;
            black_box(ai.choose_move(&mut board, PlayerMark::B).unwrap())
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
