use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::on_bishop_line;
use crate::moves::rook_moves::on_rook_line;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
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
pub const fn on_queen_line(from: Square, to: Square) -> bool {
    on_bishop_line(from, to) || on_rook_line(from, to)
}
