use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(game_state, color, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn rook_rays_stop_at_own_pieces_and_include_captures() {
        let game = GameState::from_fen("4k3/8/8/8/r2R1P2/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let d4 = Square::from_algebraic("d4").expect("square should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, d4, Color::White, &mut out);

        let targets: Vec<String> = out.iter().map(|m| m.to.to_string()).collect();
        // Up 4 (d5..d8), down 3 (d3..d1), left to a4 incl. capture (3), right e4 only (1).
        assert_eq!(out.len(), 11);
        assert!(targets.contains(&"a4".to_owned()));
        assert!(targets.contains(&"e4".to_owned()));
        assert!(!targets.contains(&"f4".to_owned()));
    }
}
