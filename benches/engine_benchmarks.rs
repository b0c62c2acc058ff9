//! Benchmarks for move generation, perft and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::perft::perft;
use mailbox_chess::{find_best_move, Board, BoardPool, SearchLimits, SearchOptions};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let mut pool = BoardPool::with_capacity(256);

    // Starting position
    let board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&board, black_box(depth), &mut pool))
        });
    }

    // Complex middlegame position (Kiwipete)
    let kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&kiwipete, black_box(depth), &mut pool))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    let mut pool = BoardPool::with_capacity(64);

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        ),
        ("kiwipete", KIWIPETE),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen);
        group.bench_function(name, |b| {
            b.iter(|| {
                let count = board.generate_children(&mut pool);
                pool.drop_last(count);
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let startpos = Board::new();
    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| find_best_move(&startpos, SearchLimits::depth(depth), SearchOptions::default()))
        });
    }

    let tactical =
        Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("tactical", depth), &depth, |b, &depth| {
            b.iter(|| find_best_move(&tactical, SearchLimits::depth(depth), SearchOptions::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
