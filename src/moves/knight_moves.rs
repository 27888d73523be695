use crate::game_state::chess_types::Square;

/// (row, col) deltas of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `from` attacks.
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(|sq| sq.is_valid())
}

#[inline]
pub const fn knight_attacks(from: Square, target: Square) -> bool {
    let dr = (target.row - from.row).abs();
    let dc = (target.col - from.col).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}
