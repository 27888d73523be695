use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(game_state, color, from, &QUEEN_DIRECTIONS, out);
}
