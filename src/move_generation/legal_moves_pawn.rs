use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_pawn_move;
use crate::moves::pawn_moves::pawn_capture_targets;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    let one_step = from.offset(dir, 0);
    if one_step.is_valid() && game_state.get_piece(one_step).is_none() {
        push_pawn_move(color, from, one_step, out);

        if from.row == color.pawn_start_row() {
            let two_step = from.offset(2 * dir, 0);
            if game_state.get_piece(two_step).is_none() {
                out.push(Move::new(from, two_step));
            }
        }
    }

    for to in pawn_capture_targets(color, from) {
        match game_state.get_piece(to) {
            Some(target) if target.color != color => push_pawn_move(color, from, to, out),
            None if game_state.en_passant_square == Some(to) => out.push(Move::new(from, to)),
            _ => {}
        }
    }
}
