use crate::game_state::chess_types::{Color, Square};

/// Diagonal capture squares of a `color` pawn on `from`, on-board only.
pub fn pawn_capture_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .map(move |dc| from.offset(dir, dc))
        .filter(|sq| sq.is_valid())
}

/// Pawns attack one row forward and one column sideways; pushes never attack.
#[inline]
pub const fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    target.row - from.row == color.pawn_direction() && (target.col - from.col).abs() == 1
}
