//! Self-play driver: the classical engine (White) against the toy network
//! engine (Black).
//!
//! Usage:
//! `cargo run --release`
//! `cargo run --release -- --depth 3 --movetime-ms 2000 --max-plies 80`
//! `cargo run --release -- --fen "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1" --opening-plies 0`
//! `RUST_LOG=debug cargo run --release` shows per-depth search progress.

use std::str::FromStr;
use std::time::Duration;

use quince_chess::chess_errors::ChessError;
use quince_chess::game_state::game_state::GameState;
use quince_chess::search::iterative_deepening::{EvaluatorKind, SearchConfig, SearchEngine};
use quince_chess::search::toy_network::DEFAULT_NETWORK_SEED;
use quince_chess::utils::long_algebraic::moves_to_long_algebraic;
use quince_chess::utils::render_game_state::render_game_state;
use quince_chess::utils::self_play::{play_game, SelfPlayConfig};

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_arg<T: FromStr>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), ChessError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let defaults = SearchConfig::default();

    let depth = parse_arg(&args, "--depth", defaults.max_depth).max(1);
    let movetime_ms = parse_arg(&args, "--movetime-ms", defaults.time_budget.as_millis() as u64);
    let seed = parse_arg(&args, "--seed", DEFAULT_NETWORK_SEED);
    let self_play = SelfPlayConfig {
        max_plies: parse_arg(&args, "--max-plies", 120),
        opening_plies: parse_arg(&args, "--opening-plies", 2),
        seed,
    };

    let start = match arg_value(&args, "--fen") {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    let base = SearchConfig {
        max_depth: depth,
        time_budget: Duration::from_millis(movetime_ms),
        network_seed: seed,
        ..defaults
    };
    let white = SearchEngine::new(SearchConfig {
        evaluator: EvaluatorKind::Classical,
        ..base
    });
    let black = SearchEngine::new(SearchConfig {
        evaluator: EvaluatorKind::Network,
        ..base
    });

    println!("{}\n", render_game_state(&start));
    for (side, engine) in [("White", &white), ("Black", &black)] {
        let config = engine.config();
        println!(
            "{side}: {:?} evaluator, depth {}, {} ms per move, network seed {}",
            config.evaluator,
            config.max_depth,
            config.time_budget.as_millis(),
            config.network_seed
        );
    }

    let record = play_game(&start, &white, &black, self_play);

    for (i, ply) in record.plies.iter().enumerate() {
        match &ply.search {
            Some(result) => println!(
                "{:>3}. {:?} {} score {} depth {} nodes {} cuts {} {:.3}s pv [{}]",
                i + 1,
                ply.mover,
                ply.mv,
                result.score,
                result.completed_depth,
                result.nodes_searched,
                result.pruning_cuts,
                result.elapsed_seconds(),
                moves_to_long_algebraic(&result.principal_variation)
            ),
            None => println!("{:>3}. {:?} {} (random opening)", i + 1, ply.mover, ply.mv),
        }
    }

    println!("\n{}\n", render_game_state(&record.final_state));
    println!("Result: {}", record.outcome.describe());
    println!("FEN: {}", record.final_state.get_fen());
    println!(
        "Started {} and took {:.1}s",
        record.started_at.format("%Y-%m-%d %H:%M:%S"),
        (record.finished_at - record.started_at).num_milliseconds() as f64 / 1000.0
    );

    Ok(())
}
