//! Move application.
//!
//! `apply_move` is the search discipline: it consumes an owned state and
//! yields the successor, or `None` when the mover's own king is left attacked.
//! The in-place `make_move` / `unmake_move` pair shares the same board update
//! and exists for perft cross-checks and round-trip verification.

use crate::game_state::chess_rules::castle_for_king_move;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::Move;

impl GameState {
    /// Successor position after `mv`, or `None` if `mv` leaves the mover in check.
    #[inline]
    pub fn apply_move(mut self, mv: Move) -> Option<GameState> {
        let mover = self.side_to_move;
        self.make_move(mv);
        if is_king_in_check(&self, mover) {
            None
        } else {
            Some(self)
        }
    }

    /// Plays `mv` in place without a legality check and returns what
    /// `unmake_move` needs to reverse it. Calls must nest LIFO.
    pub fn make_move(&mut self, mv: Move) -> UndoState {
        let undo = UndoState {
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        };

        let mover = self.side_to_move;
        let enemy = mover.opposite();
        let from = mv.from();
        let to = mv.to();
        let moving = Piece::new(mover, mv.moved_piece());

        self.set_en_passant_square(None);

        if mv.is_en_passant() {
            self.remove_piece(Piece::new(enemy, PieceKind::Pawn), en_passant_victim(mover, to));
        } else if let Some(captured) = mv.captured_piece() {
            self.remove_piece(Piece::new(enemy, captured), to);
        }

        self.remove_piece(moving, from);
        let landed = mv
            .promotion_piece()
            .map_or(moving, |kind| Piece::new(mover, kind));
        self.put_piece(landed, to);

        if mv.is_castle() {
            if let Some(castle) = castle_for_king_move(from, to) {
                self.move_piece(Piece::new(mover, PieceKind::Rook), castle.rook_from, castle.rook_to);
                self.set_castle_rights(castle.rook_from);
            }
        }

        self.set_castle_rights(from);
        self.set_castle_rights(to);

        if mv.is_double_pawn_push() {
            self.set_en_passant_square(Some((from + to) / 2));
        }

        if moving.kind == PieceKind::Pawn || mv.captured_piece().is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.flip_side();
        undo
    }

    /// Reverses the `make_move(mv)` that produced `undo`.
    pub fn unmake_move(&mut self, mv: Move, undo: UndoState) {
        self.flip_side();

        let mover = self.side_to_move;
        let enemy = mover.opposite();
        let from = mv.from();
        let to = mv.to();
        let moving = Piece::new(mover, mv.moved_piece());

        if mv.is_castle() {
            if let Some(castle) = castle_for_king_move(from, to) {
                self.move_piece(Piece::new(mover, PieceKind::Rook), castle.rook_to, castle.rook_from);
            }
        }

        let landed = mv
            .promotion_piece()
            .map_or(moving, |kind| Piece::new(mover, kind));
        self.remove_piece(landed, to);
        self.put_piece(moving, from);

        if mv.is_en_passant() {
            self.put_piece(Piece::new(enemy, PieceKind::Pawn), en_passant_victim(mover, to));
        } else if let Some(captured) = mv.captured_piece() {
            self.put_piece(Piece::new(enemy, captured), to);
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim(mover: Color, to: Square) -> Square {
    match mover {
        Color::White => to - 8,
        Color::Black => to + 8,
    }
}
