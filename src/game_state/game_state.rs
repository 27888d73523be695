//! Core mailbox board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 8x8 grid,
//! side to move, castling rights, the en-passant target, and the move clocks.
//! Board access is total: squares outside the board read as empty and writes
//! to them are ignored.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::move_generation::legal_move_checks::{
    is_king_in_check, is_square_attacked, king_square, path_clear,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][col], row 0 = rank 8.
    pub board: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial setup, White to move, all castling rights held.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            state.set_piece(Square::new(0, col), Some(Piece::new(*kind, Color::Black)));
            state.set_piece(Square::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            state.set_piece(Square::new(6, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            state.set_piece(Square::new(7, col), Some(Piece::new(*kind, Color::White)));
        }
        state.castling_rights = CastlingRights::ALL;
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `square`, or `None` when the square is empty or off the board.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.board[square.row as usize][square.col as usize]
    }

    /// Writes `piece` to `square`; silently ignored when `square` is off the board.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_valid() {
            self.board[square.row as usize][square.col as usize] = piece;
        }
    }

    /// Occupied squares with their pieces, in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get_piece(sq).map(|piece| (sq, piece)))
    }

    /// Applies `mv` in place with full side effects. The move is not checked
    /// for legality.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) {
        make_move_in_place(self, mv);
    }

    /// Applies `mv` and returns the record needed to take it back.
    #[inline]
    pub fn make_move(&mut self, mv: Move) -> UndoState {
        make_move_in_place(self, mv)
    }

    #[inline]
    pub fn unmake_move(&mut self, undo: UndoState) {
        unmake_move_in_place(self, undo);
    }

    /// Copy of this state with `mv` applied.
    pub fn after_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self, square, by_color)
    }

    /// `false` when `color` has no king on the board.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        king_square(self, color)
    }

    #[inline]
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        path_clear(self, from, to)
    }
}
