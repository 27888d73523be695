//! Long algebraic move text (`e2e4`, `e7e8q`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Splits move text into squares and an optional promotion without looking
/// at any position.
pub fn parse_move_text(text: &str) -> ChessResult<Move> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let bad_text = |_| ChessError::InvalidMoveText(text.to_owned());
    let from = Square::from_algebraic(&text[0..2]).map_err(bad_text)?;
    let to = Square::from_algebraic(&text[2..4]).map_err(bad_text)?;

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind) if PROMOTION_KINDS.contains(&kind) => Ok(Move::with_promotion(from, to, kind)),
            _ => Err(ChessError::InvalidMoveText(text.to_owned())),
        },
    }
}

/// Resolves move text against the legal moves of `game_state`.
pub fn parse_long_algebraic(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let wanted = parse_move_text(text)?;
    generate_legal_moves(game_state)
        .into_iter()
        .find(|mv| *mv == wanted)
        .ok_or_else(|| ChessError::IllegalMove(wanted.to_string()))
}

/// Formats a line of moves separated by spaces.
pub fn moves_to_long_algebraic(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
