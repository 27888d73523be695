//! Iterative deepening search with minimax alpha-beta pruning.
//!
//! Each depth runs a full alpha-beta pass from the root on one scratch
//! position using make/unmake. A depth's result is only accepted when the
//! pass finishes inside the time budget; otherwise the previous depth stands.
//!
//! Scores inside the tree are from White's side (White maximizes). Evaluator
//! output is mover-relative and converted at the leaves; the root result is
//! converted back to the side to move.

use std::time::Duration;

use log::{debug, info, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::move_generation::legal_move_shared::is_capture;
use crate::search::board_scoring::{color_sign, BoardScorer, ClassicalScorer};
use crate::search::move_ordering::order_moves;
use crate::search::search_clock::SearchClock;
use crate::search::toy_network::{ToyNetworkScorer, DEFAULT_NETWORK_SEED};

/// Base score of a checkmate. Mates found with more depth left score higher.
pub const MATE_SCORE: i32 = 100_000;
const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    #[default]
    Classical,
    Network,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_budget: Duration,
    pub evaluator: EvaluatorKind,
    /// Extra capture-only plies below the nominal depth.
    pub quiescence_depth: u8,
    pub network_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_budget: Duration::from_millis(5000),
            evaluator: EvaluatorKind::Classical,
            quiescence_depth: 5,
            network_seed: DEFAULT_NETWORK_SEED,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// `None` when the root has no legal moves or no depth completed.
    pub best_move: Option<Move>,
    /// Relative to the side to move at the root.
    pub score: i32,
    pub completed_depth: u8,
    /// Interior nodes plus quiescence nodes; each leaf is counted once.
    pub nodes_searched: u64,
    pub pruning_cuts: u64,
    pub elapsed: Duration,
    pub principal_variation: Vec<Move>,
}

impl SearchResult {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

pub struct SearchEngine {
    config: SearchConfig,
    classical: ClassicalScorer,
    network: Option<ToyNetworkScorer>,
}

struct SearchContext<'a> {
    scorer: &'a dyn BoardScorer,
    use_quiescence: bool,
    quiescence_depth: u8,
    clock: SearchClock,
    nodes: u64,
    cuts: u64,
}

struct RootOutcome {
    best_move: Move,
    white_score: i32,
    principal_variation: Vec<Move>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        let network = match config.evaluator {
            EvaluatorKind::Network => Some(ToyNetworkScorer::new(config.network_seed)),
            EvaluatorKind::Classical => None,
        };
        Self {
            config,
            classical: ClassicalScorer,
            network,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The evaluator selected by the configuration.
    pub fn scorer(&self) -> &dyn BoardScorer {
        match &self.network {
            Some(network) => network,
            None => &self.classical,
        }
    }

    pub fn search_default(&self, game_state: &GameState) -> SearchResult {
        self.search(game_state, self.config.max_depth)
    }

    /// Searches depths `1..=max_depth`, keeping the deepest one that finished
    /// inside the time budget.
    pub fn search(&self, game_state: &GameState, max_depth: u8) -> SearchResult {
        let mut ctx = SearchContext {
            scorer: self.scorer(),
            use_quiescence: self.network.is_none(),
            quiescence_depth: self.config.quiescence_depth,
            clock: SearchClock::start(self.config.time_budget),
            nodes: 0,
            cuts: 0,
        };

        let mut root = game_state.clone();
        let root_sign = color_sign(root.side_to_move);

        let root_moves = generate_legal_moves_in_place(&mut root);
        if root_moves.is_empty() {
            let score = if root.is_in_check(root.side_to_move) {
                -MATE_SCORE
            } else {
                0
            };
            trace!("root has no legal moves, score {score}");
            return SearchResult {
                score,
                nodes_searched: 1,
                elapsed: ctx.clock.elapsed(),
                ..SearchResult::default()
            };
        }

        if max_depth == 0 {
            trace!("depth 0 requested, returning static evaluation");
            return SearchResult {
                score: ctx.scorer.score(&root),
                nodes_searched: 1,
                elapsed: ctx.clock.elapsed(),
                ..SearchResult::default()
            };
        }

        let mut result = SearchResult {
            score: ctx.scorer.score(&root),
            ..SearchResult::default()
        };

        for depth in 1..=max_depth {
            if ctx.clock.is_expired() {
                break;
            }

            let Some(outcome) = search_root(&mut root, &root_moves, depth, &mut ctx) else {
                debug!("depth {depth} abandoned after {:?}", ctx.clock.elapsed());
                break;
            };

            result.best_move = Some(outcome.best_move);
            result.score = root_sign * outcome.white_score;
            result.completed_depth = depth;
            result.principal_variation = outcome.principal_variation;

            debug!(
                "depth {depth} best {} score {} nodes {} cuts {}",
                outcome.best_move, result.score, ctx.nodes, ctx.cuts
            );
        }

        result.nodes_searched = ctx.nodes;
        result.pruning_cuts = ctx.cuts;
        result.elapsed = ctx.clock.elapsed();

        info!(
            "search finished: depth {} score {} nodes {} cuts {} in {:.3}s",
            result.completed_depth,
            result.score,
            result.nodes_searched,
            result.pruning_cuts,
            result.elapsed_seconds()
        );

        result
    }
}

fn search_root(
    game_state: &mut GameState,
    root_moves: &[Move],
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Option<RootOutcome> {
    let mut moves = root_moves.to_vec();
    order_moves(game_state, &mut moves);

    let maximizing = game_state.side_to_move == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best: Option<(Move, i32, Vec<Move>)> = None;

    for mv in moves {
        if ctx.clock.is_expired() {
            return None;
        }

        let undo = game_state.make_move(mv);
        let child = alpha_beta(game_state, depth - 1, alpha, beta, !maximizing, ctx);
        game_state.unmake_move(undo);
        let (score, child_pv) = child?;

        let improves = match &best {
            None => true,
            Some((_, best_score, _)) if maximizing => score > *best_score,
            Some((_, best_score, _)) => score < *best_score,
        };
        if improves {
            best = Some((mv, score, prefixed(mv, child_pv)));
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    // A pass that ran past the deadline is not trusted.
    if ctx.clock.is_expired() {
        return None;
    }

    best.map(|(best_move, white_score, principal_variation)| RootOutcome {
        best_move,
        white_score,
        principal_variation,
    })
}

fn alpha_beta(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
) -> Option<(i32, Vec<Move>)> {
    if ctx.clock.is_expired() {
        return None;
    }

    // Leaves are counted once, by whichever evaluation handles them.
    if depth == 0 {
        return Some((leaf_score(game_state, alpha, beta, maximizing, ctx), Vec::new()));
    }
    ctx.nodes += 1;

    let mut moves = generate_legal_moves_in_place(game_state);
    if moves.is_empty() {
        return Some((terminal_score(game_state, depth, maximizing), Vec::new()));
    }
    order_moves(game_state, &mut moves);

    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_pv = Vec::new();

    for mv in moves {
        let undo = game_state.make_move(mv);
        let child = alpha_beta(game_state, depth - 1, alpha, beta, !maximizing, ctx);
        game_state.unmake_move(undo);
        let (score, child_pv) = child?;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_pv = prefixed(mv, child_pv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_pv = prefixed(mv, child_pv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            ctx.cuts += 1;
            break;
        }
    }

    Some((best_score, best_pv))
}

fn leaf_score(
    game_state: &mut GameState,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    if ctx.use_quiescence {
        let depth = ctx.quiescence_depth;
        quiescence(game_state, alpha, beta, maximizing, depth, ctx)
    } else {
        ctx.nodes += 1;
        white_relative(game_state, ctx.scorer)
    }
}

/// Capture-only extension with a stand-pat floor (or ceiling for the
/// minimizing side). Fail-hard: results are clamped to the window.
fn quiescence(
    game_state: &mut GameState,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    let stand_pat = white_relative(game_state, ctx.scorer);
    if depth == 0 {
        return stand_pat;
    }

    if maximizing {
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);
    } else {
        if stand_pat <= alpha {
            return alpha;
        }
        beta = beta.min(stand_pat);
    }

    let mut captures = generate_legal_moves_in_place(game_state);
    captures.retain(|&mv| is_capture(game_state, mv));
    order_moves(game_state, &mut captures);

    for mv in captures {
        let undo = game_state.make_move(mv);
        let score = quiescence(game_state, alpha, beta, !maximizing, depth - 1, ctx);
        game_state.unmake_move(undo);

        if maximizing {
            if score >= beta {
                ctx.cuts += 1;
                return beta;
            }
            alpha = alpha.max(score);
        } else {
            if score <= alpha {
                ctx.cuts += 1;
                return alpha;
            }
            beta = beta.min(score);
        }
    }

    if maximizing {
        alpha
    } else {
        beta
    }
}

/// Mate counts against the side to move, more so with more depth left.
fn terminal_score(game_state: &GameState, depth: u8, maximizing: bool) -> i32 {
    if !game_state.is_in_check(game_state.side_to_move) {
        return 0;
    }
    let mate = MATE_SCORE + i32::from(depth);
    if maximizing {
        -mate
    } else {
        mate
    }
}

#[inline]
fn white_relative(game_state: &GameState, scorer: &dyn BoardScorer) -> i32 {
    color_sign(game_state.side_to_move) * scorer.score(game_state)
}

fn prefixed(mv: Move, continuation: Vec<Move>) -> Vec<Move> {
    let mut line = Vec::with_capacity(continuation.len() + 1);
    line.push(mv);
    line.extend(continuation);
    line
}
