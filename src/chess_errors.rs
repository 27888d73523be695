//! Errors used at the text-facing edges of the engine.
//!
//! Board access, move generation, evaluation, and search are total and never
//! fail. Only inputs that arrive as text (FEN records, square names, long
//! algebraic moves) or moves supplied from outside the generator can be
//! rejected, and those paths return `ChessResult`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN record could not be parsed. Payload describes the first problem found.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square name outside `a1`..`h8`.
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// Move text that is not of the form `e2e4` / `e7e8q`.
    #[error("invalid move text '{0}'")]
    InvalidMoveText(String),

    /// Well-formed move text that is not legal in the given position.
    #[error("illegal move {0} in this position")]
    IllegalMove(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
