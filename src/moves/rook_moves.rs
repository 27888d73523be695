use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// `true` when `to` shares a rank or file with `from`; blockers are not considered.
#[inline]
pub const fn on_rook_line(from: Square, to: Square) -> bool {
    (from.row == to.row) != (from.col == to.col)
}
