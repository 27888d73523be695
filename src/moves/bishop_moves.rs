use crate::game_state::chess_types::Square;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// `true` when `to` lies on a diagonal through `from`; blockers are not considered.
#[inline]
pub const fn on_bishop_line(from: Square, to: Square) -> bool {
    let dr = (to.row - from.row).abs();
    let dc = (to.col - from.col).abs();
    dr == dc && dr != 0
}
