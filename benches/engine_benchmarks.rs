//! Benchmarks for the four-player engine, mirroring the donor's
//! `benches/engine_benchmarks.rs` split into perft/movegen/search/eval
//! groups (§10.5).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fourplayer_chess_engine::engine::{self, SearchLimits};
use fourplayer_chess_engine::eval::{evaluate, Weights};
use fourplayer_chess_engine::position::{is_legal, movegen, perft, Position};
use fourplayer_chess_engine::search::{SearchControl, SearchParams};
use fourplayer_chess_engine::tt::TranspositionTable;
use fourplayer_chess_engine::types::MoveList;

/// A few plies into a real game, played by always taking the first legal
/// move in generation order, used where the standard setup's mostly-blocked
/// mobility would understate move-generation/eval cost. Guaranteed legal by
/// construction, unlike a hand-written FEN.
fn middlegame_position() -> Position {
    let mut position = Position::new_standard();
    for _ in 0..12 {
        let mut moves = MoveList::new();
        movegen::generate_pseudo_legal(&position, &mut moves);
        let Some(mv) = moves.iter().copied().find(|mv| is_legal(&mut position, mv)) else { break };
        position.make(&mv);
    }
    position
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let mut position = Position::new_standard();
            b.iter(|| perft::perft(&mut position, black_box(depth)));
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    group.bench_function("startpos", |b| {
        let position = Position::new_standard();
        let mut moves = MoveList::new();
        b.iter(|| {
            moves = MoveList::new();
            movegen::generate_pseudo_legal(black_box(&position), &mut moves);
        });
    });

    group.bench_function("middlegame", |b| {
        let position = middlegame_position();
        let mut moves = MoveList::new();
        b.iter(|| {
            moves = MoveList::new();
            movegen::generate_pseudo_legal(black_box(&position), &mut moves);
        });
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let position = Position::new_standard();
                let tt = TranspositionTable::new(8);
                let params = SearchParams::default();
                let weights = Weights::default();
                let control = SearchControl::new(None);
                engine::run(&position, &tt, &params, &weights, 1, SearchLimits::depth(depth), &control, |_, _| {})
            });
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [("startpos", Position::new_standard()), ("middlegame", middlegame_position())];

    for (name, position) in &positions {
        let weights = Weights::default();
        group.bench_with_input(BenchmarkId::new("position", *name), position, |b, position| {
            b.iter(|| black_box(evaluate(position, -1_000_000, 1_000_000, &weights)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);
