//! Pluggable board evaluation interfaces and the classical heuristic scorer.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing the classical heuristic and the toy network to be swapped without
//! altering search code.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::tables::piece_square_tables::piece_square_bonus;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Centipawn value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// The four central squares d5, e5, d4, e4.
pub const CENTER_SQUARES: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

/// Material, piece-square tables, mobility, check, centre control and
/// doubled pawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalScorer;

impl ClassicalScorer {
    const MOBILITY_WEIGHT: i32 = 10;
    const CHECK_PENALTY: i32 = 50;
    const CENTER_OCCUPY_BONUS: i32 = 10;
    const CENTER_ATTACK_BONUS: i32 = 5;
    const DOUBLED_PAWN_PENALTY: i32 = 10;
    const END_GAME_HEAVY_PIECES: usize = 2;

    /// White material minus black material.
    pub fn material_balance(game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(_, piece)| color_sign(piece.color) * piece_value(piece.kind))
            .sum()
    }

    /// At most two queens and rooks left on the board, both colours counted.
    pub fn is_end_game(game_state: &GameState) -> bool {
        game_state
            .pieces()
            .filter(|(_, piece)| matches!(piece.kind, PieceKind::Queen | PieceKind::Rook))
            .count()
            <= Self::END_GAME_HEAVY_PIECES
    }

    /// Same terms as `score`, but always from White's side.
    pub fn white_relative_score(game_state: &GameState) -> i32 {
        let is_end_game = Self::is_end_game(game_state);
        let mut score = 0i32;

        for (square, piece) in game_state.pieces() {
            let value = piece_value(piece.kind)
                + piece_square_bonus(piece.kind, piece.color, square, is_end_game);
            score += color_sign(piece.color) * value;
        }

        let mover = game_state.side_to_move;
        let mobility = generate_legal_moves(game_state).len() as i32;
        score += color_sign(mover) * mobility * Self::MOBILITY_WEIGHT;

        if game_state.is_in_check(mover) {
            score -= color_sign(mover) * Self::CHECK_PENALTY;
        }

        score + Self::center_control(game_state) + Self::pawn_structure(game_state)
    }

    fn center_control(game_state: &GameState) -> i32 {
        let mut score = 0i32;
        for square in CENTER_SQUARES {
            if let Some(piece) = game_state.get_piece(square) {
                score += color_sign(piece.color) * Self::CENTER_OCCUPY_BONUS;
            }
            if is_square_attacked(game_state, square, Color::White) {
                score += Self::CENTER_ATTACK_BONUS;
            }
            if is_square_attacked(game_state, square, Color::Black) {
                score -= Self::CENTER_ATTACK_BONUS;
            }
        }
        score
    }

    fn pawn_structure(game_state: &GameState) -> i32 {
        let mut pawns_per_file = [[0i32; 8]; 2];
        for (square, piece) in game_state.pieces() {
            if piece.kind == PieceKind::Pawn {
                pawns_per_file[piece.color.index()][square.col as usize] += 1;
            }
        }

        let mut score = 0i32;
        for color in [Color::White, Color::Black] {
            for &count in &pawns_per_file[color.index()] {
                if count > 1 {
                    score -= color_sign(color) * (count - 1) * Self::DOUBLED_PAWN_PENALTY;
                }
            }
        }
        score
    }
}

impl BoardScorer for ClassicalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_minus_black = Self::white_relative_score(game_state);
        match game_state.side_to_move {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

#[inline]
pub(crate) const fn color_sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, ClassicalScorer};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_material_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(ClassicalScorer::material_balance(&game), 0);
    }

    #[test]
    fn start_position_scores_only_mobility() {
        // Tables mirror exactly and nothing reaches the centre yet, so the
        // twenty legal moves are the whole score.
        let game = GameState::new_game();
        assert_eq!(ClassicalScorer.score(&game), 200);
    }

    #[test]
    fn bare_kings_score_king_mobility() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(ClassicalScorer::is_end_game(&game));
        assert_eq!(ClassicalScorer.score(&game), 50);
    }

    #[test]
    fn central_pawn_terms_add_up_exactly() {
        // 100 material + 20 table + 6 moves * 10 + 10 occupying e4 + 5 for d5.
        let game = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(ClassicalScorer.score(&game), 195);
    }

    #[test]
    fn score_is_mover_relative() {
        let white_to_move =
            GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let black_to_move =
            GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").expect("FEN should parse");
        assert!(ClassicalScorer.score(&white_to_move) > 800);
        assert!(ClassicalScorer.score(&black_to_move) < -800);
    }

    #[test]
    fn doubled_pawns_are_penalised() {
        let doubled =
            GameState::from_fen("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(ClassicalScorer::pawn_structure(&doubled), -10);

        let tripled_black =
            GameState::from_fen("4k3/p7/p7/p7/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(ClassicalScorer::pawn_structure(&tripled_black), 20);
    }

    #[test]
    fn being_in_check_costs_fifty() {
        // -500 rook, three king escapes (+30), check (-50).
        let checked =
            GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(ClassicalScorer.score(&checked), -520);
    }
}
