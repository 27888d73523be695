use std::time::Duration;

use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::legal_move_generator::generate_legal_moves;
use quince_chess::search::iterative_deepening::{
    EvaluatorKind, SearchConfig, SearchEngine, MATE_SCORE,
};

fn engine(evaluator: EvaluatorKind, max_depth: u8) -> SearchEngine {
    SearchEngine::new(SearchConfig {
        max_depth,
        time_budget: Duration::from_secs(120),
        evaluator,
        ..SearchConfig::default()
    })
}

#[test]
fn searched_moves_and_lines_are_legal() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/1P6/8/8/8/8/6p1/4K3 b - - 0 1",
    ];

    for evaluator in [EvaluatorKind::Classical, EvaluatorKind::Network] {
        let engine = engine(evaluator, 2);
        for fen in fens {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let result = engine.search_default(&game);

            let best = result.best_move.expect("a legal move should be found");
            assert!(generate_legal_moves(&game).contains(&best), "{fen}: {best}");
            assert_eq!(result.completed_depth, 2, "{fen}");
            assert!(result.nodes_searched > 0);

            assert_eq!(result.principal_variation.first(), Some(&best));
            let mut replay = game.clone();
            for mv in &result.principal_variation {
                assert!(generate_legal_moves(&replay).contains(mv), "{fen}: pv move {mv}");
                replay.apply_move(*mv);
            }
        }
    }
}

#[test]
fn checkmated_root_reports_mate_without_a_move() {
    let fools_mate =
        GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
    let result = engine(EvaluatorKind::Classical, 3).search_default(&fools_mate);

    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);
    assert_eq!(result.completed_depth, 0);
}

#[test]
fn stalemated_root_scores_zero_without_a_move() {
    let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
    assert!(generate_legal_moves(&stalemate).is_empty());

    let result = engine(EvaluatorKind::Network, 3).search_default(&stalemate);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn finds_back_rank_mate_in_one() {
    let game = GameState::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").expect("FEN should parse");
    let result = engine(EvaluatorKind::Classical, 2).search_default(&game);

    let best = result.best_move.expect("mate should be found");
    assert_eq!(best.to_string(), "h1h8");
    assert_eq!(result.score, MATE_SCORE + 1);

    let after = game.after_move(best);
    assert!(generate_legal_moves(&after).is_empty());
    assert!(after.is_in_check(after.side_to_move));
}

#[test]
fn losing_side_still_reports_mate_against_itself() {
    // Black to move is mated next move whatever it plays.
    let game = GameState::from_fen("k7/8/1K6/8/8/8/8/7R b - - 0 1").expect("FEN should parse");
    let result = engine(EvaluatorKind::Classical, 3).search_default(&game);

    assert!(result.best_move.is_some());
    assert!(result.score <= -MATE_SCORE, "score {}", result.score);
}

#[test]
fn zero_budget_completes_no_depth() {
    let engine = SearchEngine::new(SearchConfig {
        time_budget: Duration::ZERO,
        ..SearchConfig::default()
    });
    let result = engine.search_default(&GameState::new_game());

    assert_eq!(result.best_move, None);
    assert_eq!(result.completed_depth, 0);
    assert!(result.principal_variation.is_empty());
}

#[test]
fn short_budget_still_returns_a_move() {
    let engine = SearchEngine::new(SearchConfig {
        max_depth: 12,
        time_budget: Duration::from_millis(1000),
        ..SearchConfig::default()
    });
    let game = GameState::new_game();
    let result = engine.search_default(&game);

    let best = result.best_move.expect("depth 1 should finish inside a second");
    assert!(result.completed_depth >= 1);
    assert!(result.completed_depth < 12);
    assert!(generate_legal_moves(&game).contains(&best));
    assert!(result.elapsed < Duration::from_secs(5));
}

#[test]
fn deeper_search_keeps_the_last_completed_depth() {
    let game = GameState::new_game();
    let shallow = engine(EvaluatorKind::Classical, 1).search_default(&game);
    let deeper = engine(EvaluatorKind::Classical, 3).search_default(&game);

    assert_eq!(shallow.completed_depth, 1);
    assert_eq!(deeper.completed_depth, 3);
    assert!(deeper.nodes_searched > shallow.nodes_searched);
    assert_eq!(deeper.principal_variation.len(), 3);
}
