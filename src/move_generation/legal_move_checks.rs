//! Attack geometry queries.
//!
//! These answer "could a piece of this color strike that square" without
//! regard to whether the attacker is pinned; legality is decided elsewhere.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::on_bishop_line;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::on_queen_line;
use crate::moves::rays::squares_between;
use crate::moves::rook_moves::on_rook_line;

/// First king of `color` in scan order.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .pieces()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(sq, _)| sq)
}

/// `false` when `color` has no king.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    game_state
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, piece)| piece_attacks(game_state, from, piece, square))
}

/// `true` when every square strictly between `from` and `to` is empty.
#[inline]
pub fn path_clear(game_state: &GameState, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| game_state.get_piece(sq).is_none())
}

fn piece_attacks(game_state: &GameState, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        PieceKind::Knight => knight_attacks(from, target),
        PieceKind::King => king_attacks(from, target),
        PieceKind::Bishop => on_bishop_line(from, target) && path_clear(game_state, from, target),
        PieceKind::Rook => on_rook_line(from, target) && path_clear(game_state, from, target),
        PieceKind::Queen => on_queen_line(from, target) && path_clear(game_state, from, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("square should parse")
    }

    #[test]
    fn sliders_are_blocked_by_pieces_between() {
        let game = GameState::from_fen("4k3/8/8/8/R2p3r/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(game.is_square_attacked(sq("c4"), Color::White));
        assert!(game.is_square_attacked(sq("d4"), Color::White));
        assert!(!game.is_square_attacked(sq("e4"), Color::White));
        assert!(game.is_square_attacked(sq("e4"), Color::Black));
        assert!(game.is_square_attacked(sq("h1"), Color::Black));
    }

    #[test]
    fn pinned_pieces_still_attack() {
        // The e2 knight is pinned against e1 but still covers d4.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(game.is_square_attacked(sq("d4"), Color::White));
        assert!(!game.is_in_check(Color::White));
    }

    #[test]
    fn pawn_pushes_are_not_attacks() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!game.is_square_attacked(sq("e3"), Color::White));
        assert!(game.is_square_attacked(sq("d3"), Color::White));
        assert!(game.is_square_attacked(sq("f3"), Color::White));
    }

    #[test]
    fn blocked_slider_no_longer_checks() {
        let open =
            GameState::from_fen("4k3/8/8/8/1b6/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&open, Color::White));

        let rook_blocked =
            GameState::from_fen("4k3/8/8/8/1b6/8/8/r2NK3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&rook_blocked, Color::White));

        let both_blocked =
            GameState::from_fen("4k3/8/8/8/1b6/2N5/8/r2NK3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&both_blocked, Color::White));
    }
}
