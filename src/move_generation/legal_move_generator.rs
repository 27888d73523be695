//! Full legal move generation pipeline.
//!
//! Walks the board in scan order (row 0 first, columns left to right),
//! collects pseudo-legal moves piece by piece, then keeps only those that do
//! not leave the mover's own king attacked. The output order is therefore
//! deterministic for a given position.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        generate_legal_moves(game_state)
    }
}

/// Pseudo-legal moves for the side to move, in scan order.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let color = game_state.side_to_move;
    let mut pseudo = Vec::with_capacity(64);

    for (from, piece) in game_state.pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, color, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(game_state, from, color, &mut pseudo),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, color, &mut pseudo),
            PieceKind::Rook => generate_rook_moves(game_state, from, color, &mut pseudo),
            PieceKind::Queen => generate_queen_moves(game_state, from, color, &mut pseudo),
            PieceKind::King => generate_king_moves(game_state, from, color, &mut pseudo),
        }
    }

    pseudo
}

/// Legal moves for the side to move. Empty means checkmate or stalemate.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut scratch = game_state.clone();
    generate_legal_moves_in_place(&mut scratch)
}

/// Same as `generate_legal_moves`, testing each candidate by make/unmake on
/// `game_state`, which is left exactly as it was found.
pub fn generate_legal_moves_in_place(game_state: &mut GameState) -> Vec<Move> {
    let mover = game_state.side_to_move;
    let mut legal = generate_pseudo_legal_moves(game_state);

    legal.retain(|&mv| {
        let undo = make_move_in_place(game_state, mv);
        let leaves_king_attacked = is_king_in_check(game_state, mover);
        unmake_move_in_place(game_state, undo);
        !leaves_king_attacked
    });

    legal
}
