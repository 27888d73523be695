//! Cheap per-move scores used to sort candidates before searching them.

use std::cmp::Reverse;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::board_scoring::piece_value;

/// Victim value minus a tenth of the attacker value for captures, plus the
/// promoted piece's value, minus twice the destination's distance from the
/// centre.
pub fn quick_move_score(game_state: &GameState, mv: Move) -> i32 {
    let mut score = 0i32;

    if let (Some(victim), Some(attacker)) = (game_state.get_piece(mv.to), game_state.get_piece(mv.from)) {
        score = piece_value(victim.kind) - piece_value(attacker.kind) / 10;
    }

    if let Some(promotion) = mv.promotion {
        score += piece_value(promotion);
    }

    let center_distance = i32::from((mv.to.row - 3).abs() + (mv.to.col - 3).abs());
    score - center_distance * 2
}

/// Fills in `order_score` and sorts best-first. Ties keep generation order.
pub fn order_moves(game_state: &GameState, moves: &mut [Move]) {
    for mv in moves.iter_mut() {
        mv.order_score = quick_move_score(game_state, *mv);
    }
    moves.sort_by_key(|mv| Reverse(mv.order_score));
}
