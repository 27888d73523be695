use std::time::Duration;

use quince_chess::game_state::chess_types::Color;
use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::legal_move_generator::generate_legal_moves;
use quince_chess::search::iterative_deepening::{EvaluatorKind, SearchConfig, SearchEngine};
use quince_chess::utils::self_play::{play_game, GameOutcome, SelfPlayConfig};

fn engine(evaluator: EvaluatorKind, max_depth: u8) -> SearchEngine {
    SearchEngine::new(SearchConfig {
        max_depth,
        time_budget: Duration::from_secs(60),
        evaluator,
        ..SearchConfig::default()
    })
}

#[test]
fn classical_engine_delivers_mate_in_one() {
    let start = GameState::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").expect("FEN should parse");
    let white = engine(EvaluatorKind::Classical, 2);
    let black = engine(EvaluatorKind::Network, 2);

    let record = play_game(&start, &white, &black, SelfPlayConfig::default());

    assert_eq!(record.outcome, GameOutcome::Checkmate { winner: Color::White });
    assert_eq!(record.plies.len(), 1);
    assert_eq!(record.plies[0].mv.to_string(), "h1h8");
    assert_eq!(record.final_state.side_to_move, Color::Black);
}

#[test]
fn classical_against_network_plays_only_legal_moves() {
    let white = engine(EvaluatorKind::Classical, 1);
    let black = engine(EvaluatorKind::Network, 1);
    let config = SelfPlayConfig {
        max_plies: 12,
        opening_plies: 2,
        seed: 3,
    };

    let start = GameState::new_game();
    let record = play_game(&start, &white, &black, config);

    assert!(!record.plies.is_empty());
    assert!(record.plies.len() <= 12);
    let mut replay = start.clone();
    for (i, ply) in record.plies.iter().enumerate() {
        assert_eq!(ply.mover, replay.side_to_move, "ply {i}");
        assert!(generate_legal_moves(&replay).contains(&ply.mv), "ply {i}: {}", ply.mv);
        if let Some(search) = &ply.search {
            assert_eq!(search.best_move, Some(ply.mv));
        }
        replay.apply_move(ply.mv);
    }
    assert_eq!(replay, record.final_state);
    assert!(record.finished_at >= record.started_at);
}

#[test]
fn stalemate_ends_the_game_as_a_draw() {
    let start = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
    let engine = engine(EvaluatorKind::Classical, 1);
    let record = play_game(&start, &engine, &engine, SelfPlayConfig::default());

    assert_eq!(record.outcome, GameOutcome::Stalemate);
    assert!(record.plies.is_empty());
    assert_eq!(record.outcome.describe(), "draw by stalemate");
}
