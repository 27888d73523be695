//! Perft with the full move breakdown (captures, en passant, castles,
//! promotions, checks, mates) on the published validation positions.
//!
//! Each case is checked against its published breakdown before it is timed.
//! `QUINCE_BENCH_SUITE=standard cargo bench --bench perft_criterion` runs one
//! ply deeper.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::perft::{perft, PerftCounts};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const PROMOTIONS: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";

const fn counts(
    nodes: usize,
    captures: usize,
    en_passant: usize,
    castles: usize,
    promotions: usize,
    checks: usize,
    checkmates: usize,
) -> PerftCounts {
    PerftCounts {
        nodes,
        captures,
        en_passant,
        castles,
        promotions,
        checks,
        checkmates,
    }
}

/// (name, FEN, depth, published breakdown)
type Case = (&'static str, &'static str, u8, PerftCounts);

const QUICK: &[Case] = &[
    ("start", STARTING_POSITION_FEN, 3, counts(8902, 34, 0, 0, 0, 12, 0)),
    ("kiwipete", KIWIPETE, 2, counts(2039, 351, 1, 91, 0, 3, 0)),
    ("rook_endgame", ROOK_ENDGAME, 3, counts(2812, 209, 2, 0, 0, 267, 0)),
    ("promotions", PROMOTIONS, 2, counts(264, 87, 0, 6, 48, 10, 0)),
];

const STANDARD: &[Case] = &[
    ("start", STARTING_POSITION_FEN, 4, counts(197_281, 1576, 0, 0, 0, 469, 8)),
    ("kiwipete", KIWIPETE, 3, counts(97_862, 17_102, 45, 3162, 0, 993, 1)),
    ("rook_endgame", ROOK_ENDGAME, 4, counts(43_238, 3348, 123, 0, 0, 1680, 17)),
    ("promotions", PROMOTIONS, 3, counts(9467, 1021, 4, 0, 120, 38, 22)),
];

fn bench_perft_breakdown(c: &mut Criterion) {
    let (suite, cases) = match std::env::var("QUINCE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", STANDARD),
        _ => ("quick", QUICK),
    };

    let mut group = c.benchmark_group(format!("perft_breakdown_{suite}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for &(name, fen, depth, expected) in cases {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        assert_eq!(perft(&game, depth), expected, "{name} depth {depth}");

        group.throughput(Throughput::Elements(expected.nodes as u64));
        group.bench_with_input(
            BenchmarkId::new(name, depth),
            &depth,
            |b, &depth| b.iter(|| black_box(perft(black_box(&game), depth))),
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft_breakdown);
criterion_main!(perft_benches);
