//! Leaf-counting tree walk used to validate move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::move_generation::legal_move_shared::{is_capture, is_en_passant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts leaf nodes `depth` plies below `game_state`, with a breakdown of the
/// moves that reached them.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(&mut scratch, depth, &mut total);
    total
}

/// Leaf counts per root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    let mut scratch = game_state.clone();
    let root_moves = generate_legal_moves_in_place(&mut scratch);

    root_moves
        .into_iter()
        .map(|mv| {
            let undo = make_move_in_place(&mut scratch, mv);
            let nodes = if depth <= 1 {
                1
            } else {
                let mut local = PerftCounts::default();
                perft_recurse(&mut scratch, depth - 1, &mut local);
                local.nodes
            };
            unmake_move_in_place(&mut scratch, undo);
            (mv, nodes)
        })
        .collect()
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = generate_legal_moves_in_place(game_state);

    if depth == 1 {
        for mv in moves {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            classify_leaf_move(game_state, mv, &mut leaf);
            counts.merge(leaf);
        }
        return;
    }

    for mv in moves {
        let undo = make_move_in_place(game_state, mv);
        perft_recurse(game_state, depth - 1, counts);
        unmake_move_in_place(game_state, undo);
    }
}

fn classify_leaf_move(game_state: &mut GameState, mv: Move, leaf: &mut PerftCounts) {
    if is_capture(game_state, mv) {
        leaf.captures += 1;
    }
    if is_en_passant(game_state, mv) {
        leaf.en_passant += 1;
    }
    if matches!(
        game_state.get_piece(mv.from),
        Some(Piece { kind: PieceKind::King, .. })
    ) && (mv.to.col - mv.from.col).abs() == 2
    {
        leaf.castles += 1;
    }
    if mv.promotion.is_some() {
        leaf.promotions += 1;
    }

    let undo = make_move_in_place(game_state, mv);
    let defender = game_state.side_to_move;
    if is_king_in_check(game_state, defender) {
        leaf.checks += 1;
        if generate_legal_moves_in_place(game_state).is_empty() {
            leaf.checkmates += 1;
        }
    }
    unmake_move_in_place(game_state, undo);
}
