use crate::game_state::chess_types::*;

/// Most squares a single move can touch: origin, destination, plus either the
/// en-passant victim or the castling rook's two squares.
pub const MAX_TOUCHED_SQUARES: usize = 4;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Stores every overwritten square with its previous content, in write order,
/// along with the scalar state the move replaced.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub touched: [(Square, Option<Piece>); MAX_TOUCHED_SQUARES],
    pub touched_len: usize,

    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

impl UndoState {
    pub(crate) fn record(&mut self, square: Square, previous: Option<Piece>) {
        debug_assert!(self.touched_len < MAX_TOUCHED_SQUARES);
        self.touched[self.touched_len] = (square, previous);
        self.touched_len += 1;
    }

    /// Touched squares in reverse write order, ready to be restored.
    pub fn touched_in_restore_order(&self) -> impl Iterator<Item = &(Square, Option<Piece>)> {
        self.touched[..self.touched_len].iter().rev()
    }
}
