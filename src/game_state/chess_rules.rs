//! Canonical chess-rule constants.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value at which the fifty-move rule applies.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Home column of both kings.
pub const KING_HOME_COL: i8 = 4;

/// Rook columns before and after castling: (origin, destination).
pub const KINGSIDE_ROOK_COLS: (i8, i8) = (7, 5);
pub const QUEENSIDE_ROOK_COLS: (i8, i8) = (0, 3);
