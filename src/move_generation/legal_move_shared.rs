use crate::game_state::{chess_types::*, game_state::GameState};

/// Pushes `from -> to` when `to` is on the board and not held by `color`.
/// Returns `true` when the destination was empty (a ray may continue).
#[inline]
pub fn push_if_empty_or_enemy(
    game_state: &GameState,
    color: Color,
    from: Square,
    to: Square,
    out: &mut Vec<Move>,
) -> bool {
    if !to.is_valid() {
        return false;
    }
    match game_state.get_piece(to) {
        None => {
            out.push(Move::new(from, to));
            true
        }
        Some(target) => {
            if target.color != color {
                out.push(Move::new(from, to));
            }
            false
        }
    }
}

/// Ray-casts from `from` along each direction, stopping at the edge, before
/// an own piece, or on an enemy piece.
pub fn push_sliding_moves(
    game_state: &GameState,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut to = from.offset(d_row, d_col);
        while push_if_empty_or_enemy(game_state, color, from, to, out) {
            to = to.offset(d_row, d_col);
        }
    }
}

/// Pushes a pawn move, expanded into the four promotions on the last row.
#[inline]
pub fn push_pawn_move(color: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.row == color.promotion_row() {
        out.extend(
            PROMOTION_KINDS
                .iter()
                .map(|&kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<Piece> {
    game_state
        .get_piece(square)
        .filter(|piece| piece.color != game_state.side_to_move)
}

/// Destination holds an enemy piece, or the move is an en-passant capture.
pub fn is_capture(game_state: &GameState, mv: Move) -> bool {
    if enemy_piece_on(game_state, mv.to).is_some() {
        return true;
    }
    is_en_passant(game_state, mv)
}

pub fn is_en_passant(game_state: &GameState, mv: Move) -> bool {
    game_state.en_passant_square == Some(mv.to)
        && mv.from.col != mv.to.col
        && game_state.get_piece(mv.to).is_none()
        && matches!(
            game_state.get_piece(mv.from),
            Some(Piece { kind: PieceKind::Pawn, .. })
        )
}
