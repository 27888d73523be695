use crate::game_state::chess_types::Square;

/// Squares strictly between `from` and `to` when they share a rank, file, or
/// diagonal. Empty for adjacent or unaligned squares.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    let steps = if aligned && from != to {
        d_row.abs().max(d_col.abs()) - 1
    } else {
        0
    };
    let step = (d_row.signum(), d_col.signum());
    (1..=steps).map(move |i| from.offset(step.0 * i, step.1 * i))
}
