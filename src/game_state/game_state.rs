//! Core bitboard board state representation.
//!
//! `GameState` is the central model for the engine. It stores twelve piece
//! bitboards, three occupancy aggregates, turn/rights flags, and clocks. It is
//! a small `Copy` value so search can hand each recursive frame its own copy
//! (copy-on-branch); see `move_generation::legal_move_apply` for the mutators.
//!
//! Invariant: a square is set in at most one of the twelve piece boards, and
//! the aggregates always equal the union of their constituents. Only the
//! `put_piece` / `remove_piece` primitives touch the boards, and both keep the
//! aggregates in step.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::CASTLING_RIGHTS_MASK;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub(crate) pieces: [[BitBoard; 6]; 2],

    // Occupancy caches.
    pub(crate) occupancy_by_color: [BitBoard; 2],
    pub(crate) occupancy_all: BitBoard,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // Held and exported only; search ignores them.
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[BitBoard::EMPTY; 6]; 2],
            occupancy_by_color: [BitBoard::EMPTY; 2],
            occupancy_all: BitBoard::EMPTY,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, White to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
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

        let mut game_state = Self::new_empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as Square;
            game_state.put_piece(Piece::new(Color::White, kind), file);
            game_state.put_piece(Piece::new(Color::White, PieceKind::Pawn), 8 + file);
            game_state.put_piece(Piece::new(Color::Black, PieceKind::Pawn), 48 + file);
            game_state.put_piece(Piece::new(Color::Black, kind), 56 + file);
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Read accessors ---

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> BitBoard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> BitBoard {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> BitBoard {
        self.occupancy_all
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Piece standing on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        if !self.occupancy_all.test(square) {
            return None;
        }
        let color = if self.occupancy_by_color[Color::White.index()].test(square) {
            Color::White
        } else {
            Color::Black
        };
        self.piece_kind_on(color, square)
            .map(|kind| Piece::new(color, kind))
    }

    /// Kind of `color`'s piece on `square`, if any.
    #[inline]
    pub fn piece_kind_on(&self, color: Color, square: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].test(square))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceKind::King).find_first_set()
    }

    // --- Modifiers ---

    /// Clears every castling right whose king or rook home square is `square`.
    /// Rights are only ever cleared here, never set.
    #[inline]
    pub fn set_castle_rights(&mut self, square: Square) {
        self.castling_rights &= CASTLING_RIGHTS_MASK[square as usize];
    }

    /// Overwrites the en-passant square for the ply being applied.
    #[inline]
    pub fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant_square = square;
    }

    #[inline]
    pub(crate) fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    #[inline]
    pub(crate) fn put_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()].set(square);
        self.occupancy_by_color[piece.color.index()].set(square);
        self.occupancy_all.set(square);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()].clear(square);
        self.occupancy_by_color[piece.color.index()].clear(square);
        self.occupancy_all.clear(square);
    }

    #[inline]
    pub(crate) fn move_piece(&mut self, piece: Piece, from: Square, to: Square) {
        self.remove_piece(piece, from);
        self.put_piece(piece, to);
    }

    /// Checks the board invariants: piece boards are pairwise disjoint and the
    /// aggregates equal the union of their constituents.
    pub fn is_consistent(&self) -> bool {
        let mut seen = BitBoard::EMPTY;
        for color in Color::ALL {
            let mut union = BitBoard::EMPTY;
            for kind in PieceKind::ALL {
                let board = self.pieces(color, kind);
                if (seen & board).is_not_empty() {
                    return false;
                }
                seen |= board;
                union |= board;
            }
            if union != self.occupancy(color) {
                return false;
            }
        }
        self.occupancy_all == (self.occupancy(Color::White) | self.occupancy(Color::Black))
    }
}
