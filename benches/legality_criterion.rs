use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_referee::game_state::board::Board;
use chess_referee::game_state::chess_types::Color;
use chess_referee::game_state::coordinate::Coordinate;
use chess_referee::game_state::game_state::GameState;
use chess_referee::move_generation::legal_move_generator::{all_legal_moves, query_legal_moves};
use chess_referee::move_generation::mate_detection::is_checkmate;
use chess_referee::move_generation::perft::perft;

const STARTPOS_NODES: &[u64] = &[20, 400, 8902];

fn fools_mate() -> GameState {
    let mut game = GameState::new();
    for (color, from, to) in [
        (Color::White, "f2", "f3"),
        (Color::Black, "e7", "e5"),
        (Color::White, "g2", "g4"),
        (Color::Black, "d8", "h4"),
    ] {
        game.make_move_notation(color, from, to)
            .expect("fool's mate moves should be legal");
    }
    game
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let mut board = Board::standard();
    let knight = Coordinate::new(6, 0);
    group.bench_function("query_knight_startpos", |b| {
        b.iter(|| query_legal_moves(black_box(&mut board), Color::White, black_box(knight)))
    });
    group.bench_function("all_moves_startpos", |b| {
        b.iter(|| all_legal_moves(black_box(&mut board), Color::White))
    });

    let mut mated = fools_mate().board().clone();
    group.bench_function("checkmate_fools_mate", |b| {
        b.iter(|| {
            let mate = is_checkmate(black_box(&mut mated), Color::White)
                .expect("kings are on the board");
            assert!(mate);
        })
    });

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for (depth_idx, expected_nodes) in STARTPOS_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;
        let mut board = Board::standard();

        // Correctness guard before benchmarking.
        let warmup = perft(&mut board, Color::White, depth).expect("perft should run");
        assert_eq!(warmup.nodes, *expected_nodes, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let counts = perft(black_box(&mut board), Color::White, black_box(depth))
                        .expect("perft benchmark run should succeed");
                    assert_eq!(counts.nodes, *expected);
                    black_box(counts.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(legality_benches, bench_queries, bench_perft);
criterion_main!(legality_benches);
