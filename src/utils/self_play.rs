//! Engine-versus-engine game loop.
//!
//! Runs two `SearchEngine`s against each other from a start position, with an
//! optional seeded random opening prefix so repeated games diverge.

use chrono::{DateTime, Local};
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::iterative_deepening::{SearchEngine, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    MoveLimit,
}

impl GameOutcome {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOutcome::Checkmate { winner: Color::White } => "White wins by checkmate",
            GameOutcome::Checkmate { winner: Color::Black } => "Black wins by checkmate",
            GameOutcome::Stalemate => "draw by stalemate",
            GameOutcome::FiftyMoveRule => "draw by the fifty-move rule",
            GameOutcome::MoveLimit => "stopped at the move limit",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub max_plies: u16,
    /// Random legal moves played before the engines take over.
    pub opening_plies: u8,
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 0,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlyRecord {
    pub mv: Move,
    pub mover: Color,
    /// `None` for random opening moves.
    pub search: Option<SearchResult>,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub plies: Vec<PlyRecord>,
    pub outcome: GameOutcome,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn moves(&self) -> Vec<Move> {
        self.plies.iter().map(|ply| ply.mv).collect()
    }
}

/// Plays until mate, stalemate, the fifty-move rule, or `config.max_plies`.
pub fn play_game(
    start: &GameState,
    white: &SearchEngine,
    black: &SearchEngine,
    config: SelfPlayConfig,
) -> GameRecord {
    let started_at = Local::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game_state = start.clone();
    let mut plies = Vec::new();

    let outcome = loop {
        let legal_moves = generate_legal_moves(&game_state);
        let mover = game_state.side_to_move;

        if legal_moves.is_empty() {
            break if game_state.is_in_check(mover) {
                GameOutcome::Checkmate {
                    winner: mover.opposite(),
                }
            } else {
                GameOutcome::Stalemate
            };
        }
        if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
            break GameOutcome::FiftyMoveRule;
        }
        if plies.len() >= usize::from(config.max_plies) {
            break GameOutcome::MoveLimit;
        }

        let record = if plies.len() < usize::from(config.opening_plies) {
            let mv = legal_moves[rng.random_range(0..legal_moves.len())];
            info!("ply {}: {mover:?} plays random opening move {mv}", plies.len() + 1);
            PlyRecord {
                mv,
                mover,
                search: None,
            }
        } else {
            let engine = match mover {
                Color::White => white,
                Color::Black => black,
            };
            let result = engine.search_default(&game_state);
            let mv = match result.best_move {
                Some(mv) => mv,
                None => {
                    warn!("no completed search depth for {mover:?}, playing first legal move");
                    legal_moves[0]
                }
            };
            info!(
                "ply {}: {mover:?} plays {mv} (depth {}, score {}, nodes {}, {:.2}s)",
                plies.len() + 1,
                result.completed_depth,
                result.score,
                result.nodes_searched,
                result.elapsed_seconds()
            );
            PlyRecord {
                mv,
                mover,
                search: Some(result),
            }
        };

        game_state.apply_move(record.mv);
        plies.push(record);
    };

    info!("game over after {} plies: {}", plies.len(), outcome.describe());

    GameRecord {
        started_at,
        finished_at: Local::now(),
        plies,
        outcome,
        final_state: game_state,
    }
}
