use crate::game_state::chess_types::Square;

/// (row, col) deltas of the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub const fn king_attacks(from: Square, target: Square) -> bool {
    let dr = (target.row - from.row).abs();
    let dc = (target.col - from.col).abs();
    dr <= 1 && dc <= 1 && (dr + dc) > 0
}
