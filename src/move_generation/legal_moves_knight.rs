use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_if_empty_or_enemy;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        push_if_empty_or_enemy(game_state, color, from, to, out);
    }
}
