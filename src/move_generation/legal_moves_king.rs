//! King steps and castling.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COLS, KING_HOME_COL, QUEENSIDE_ROOK_COLS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, path_clear};
use crate::move_generation::legal_move_shared::push_if_empty_or_enemy;
use crate::moves::king_moves::KING_OFFSETS;

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    for &(d_row, d_col) in &KING_OFFSETS {
        push_if_empty_or_enemy(game_state, color, from, from.offset(d_row, d_col), out);
    }
    generate_castling_moves(game_state, from, color, out);
}

/// Castling needs the king on its home square and out of check, the right
/// still held, its own rook on the corner, an empty path between king and
/// rook, and the two squares the king crosses or lands on unattacked.
fn generate_castling_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let home_row = color.home_row();
    if from != Square::new(home_row, KING_HOME_COL) {
        return;
    }

    let enemy = color.opposite();
    if is_square_attacked(game_state, from, enemy) {
        return;
    }

    let sides = [
        (CastlingRights::kingside_flag(color), KINGSIDE_ROOK_COLS.0, [5, 6], 6),
        (CastlingRights::queenside_flag(color), QUEENSIDE_ROOK_COLS.0, [3, 2], 2),
    ];

    for (flag, rook_col, transit_cols, king_to_col) in sides {
        if !game_state.castling_rights.has(flag) {
            continue;
        }

        let rook_sq = Square::new(home_row, rook_col);
        if game_state.get_piece(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }
        if !path_clear(game_state, from, rook_sq) {
            continue;
        }
        if transit_cols
            .iter()
            .any(|&col| is_square_attacked(game_state, Square::new(home_row, col), enemy))
        {
            continue;
        }

        out.push(Move::new(from, Square::new(home_row, king_to_col)));
    }
}
