//! In-place move application with reversible undo records.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COLS, QUEENSIDE_ROOK_COLS};
use crate::game_state::undo_state::MAX_TOUCHED_SQUARES;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Applies `mv` to `game_state` and returns what is needed to take it back.
///
/// Side effects, in order: clocks, en-passant bookkeeping, promotion, castling
/// rook relocation and rights, then the piece itself, the move counter, and
/// the side to move. A move from an empty square only flips the side.
pub fn make_move_in_place(game_state: &mut GameState, mv: Move) -> UndoState {
    let mut undo = UndoState {
        mv,
        touched: [(mv.from, None); MAX_TOUCHED_SQUARES],
        touched_len: 0,
        prev_side_to_move: game_state.side_to_move,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    let mover_color = game_state.side_to_move;
    let moving = game_state.get_piece(mv.from);
    let captured = game_state.get_piece(mv.to);
    let prev_en_passant = game_state.en_passant_square.take();

    if let Some(mut piece) = moving {
        if piece.kind == PieceKind::Pawn || captured.is_some() {
            game_state.halfmove_clock = 0;
        } else {
            game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
        }

        if piece.kind == PieceKind::Pawn {
            if (mv.to.row - mv.from.row).abs() == 2 {
                game_state.en_passant_square =
                    Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
            }

            if prev_en_passant == Some(mv.to) && captured.is_none() {
                // The victim sits one row behind the target from the mover's view.
                let victim = mv.to.offset(-piece.color.pawn_direction(), 0);
                write_square(game_state, &mut undo, victim, None);
            }

            if let Some(promotion) = mv.promotion {
                piece.kind = promotion;
            }
        }

        if piece.kind == PieceKind::King {
            game_state.castling_rights.revoke(
                CastlingRights::kingside_flag(mover_color)
                    | CastlingRights::queenside_flag(mover_color),
            );

            if (mv.to.col - mv.from.col).abs() == 2 {
                let rook_cols = if mv.to.col > mv.from.col {
                    KINGSIDE_ROOK_COLS
                } else {
                    QUEENSIDE_ROOK_COLS
                };
                let rook_from = Square::new(mv.from.row, rook_cols.0);
                let rook_to = Square::new(mv.from.row, rook_cols.1);
                let rook = game_state.get_piece(rook_from);
                write_square(game_state, &mut undo, rook_to, rook);
                write_square(game_state, &mut undo, rook_from, None);
            }
        }

        if piece.kind == PieceKind::Rook {
            revoke_rook_right(game_state, mover_color, mv.from);
        }

        write_square(game_state, &mut undo, mv.to, Some(piece));
        write_square(game_state, &mut undo, mv.from, None);
    }

    if mover_color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = mover_color.opposite();

    undo
}

/// Restores the state captured by `make_move_in_place`.
pub fn unmake_move_in_place(game_state: &mut GameState, undo: UndoState) {
    for &(square, previous) in undo.touched_in_restore_order() {
        game_state.set_piece(square, previous);
    }
    game_state.side_to_move = undo.prev_side_to_move;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
}

/// Copying form of `make_move_in_place`.
pub fn apply_move(game_state: &GameState, mv: Move) -> GameState {
    let mut next = game_state.clone();
    make_move_in_place(&mut next, mv);
    next
}

fn write_square(game_state: &mut GameState, undo: &mut UndoState, square: Square, piece: Option<Piece>) {
    if !square.is_valid() {
        return;
    }
    undo.record(square, game_state.get_piece(square));
    game_state.set_piece(square, piece);
}

// Only a rook leaving its own corner revokes a right; a rook captured on its
// corner keeps the right alive (castling generation checks the rook is there).
fn revoke_rook_right(game_state: &mut GameState, color: Color, from: Square) {
    if from.row != color.home_row() {
        return;
    }
    if from.col == KINGSIDE_ROOK_COLS.0 {
        game_state
            .castling_rights
            .revoke(CastlingRights::kingside_flag(color));
    } else if from.col == QUEENSIDE_ROOK_COLS.0 {
        game_state
            .castling_rights
            .revoke(CastlingRights::queenside_flag(color));
    }
}
