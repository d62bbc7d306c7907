//! Packed move descriptor.
//!
//! A `Move` is a single `u64`:
//!
//! | bits   | field                              |
//! |--------|------------------------------------|
//! | 0..6   | from square                        |
//! | 6..12  | to square                          |
//! | 12..15 | moved piece kind                   |
//! | 15..18 | captured piece kind (7 = none)     |
//! | 18..21 | promotion piece kind (7 = none)    |
//! | 21..25 | flags                              |
//! | 32..48 | ordering score                     |
//!
//! Moves are produced by the generator (or resolved against its output by the
//! coordinate-notation parser) and are never mutated afterwards; `with_score`
//! returns a new value.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

const FROM_SHIFT: u64 = 0;
const TO_SHIFT: u64 = 6;
const MOVED_PIECE_SHIFT: u64 = 12;
const CAPTURED_PIECE_SHIFT: u64 = 15;
const PROMOTION_PIECE_SHIFT: u64 = 18;
const SCORE_SHIFT: u64 = 32;

const SQUARE_MASK: u64 = 0x3F;
const PIECE_MASK: u64 = 0x7;
const SCORE_MASK: u64 = 0xFFFF;
pub const NO_PIECE_CODE: u64 = 0x7;

pub const FLAG_CAPTURE: u64 = 1u64 << 21;
pub const FLAG_DOUBLE_PAWN_PUSH: u64 = 1u64 << 22;
pub const FLAG_EN_PASSANT: u64 = 1u64 << 23;
pub const FLAG_CASTLING: u64 = 1u64 << 24;

const FLAGS_MASK: u64 = FLAG_CAPTURE | FLAG_DOUBLE_PAWN_PUSH | FLAG_EN_PASSANT | FLAG_CASTLING;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u64);

impl Move {
    #[inline]
    pub fn new(
        from: Square,
        to: Square,
        moved_piece: PieceKind,
        captured_piece: Option<PieceKind>,
        promotion_piece: Option<PieceKind>,
        flags: u64,
    ) -> Self {
        let mut out = 0u64;
        out |= (from as u64 & SQUARE_MASK) << FROM_SHIFT;
        out |= (to as u64 & SQUARE_MASK) << TO_SHIFT;
        out |= piece_kind_to_code(moved_piece) << MOVED_PIECE_SHIFT;
        out |= captured_piece
            .map(piece_kind_to_code)
            .unwrap_or(NO_PIECE_CODE)
            << CAPTURED_PIECE_SHIFT;
        out |= promotion_piece
            .map(piece_kind_to_code)
            .unwrap_or(NO_PIECE_CODE)
            << PROMOTION_PIECE_SHIFT;
        out |= flags & FLAGS_MASK;
        Move(out)
    }

    /// Same move carrying a new ordering score.
    #[inline]
    pub fn with_score(self, score: u16) -> Self {
        Move((self.0 & !(SCORE_MASK << SCORE_SHIFT)) | (u64::from(score) << SCORE_SHIFT))
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn score(self) -> u16 {
        ((self.0 >> SCORE_SHIFT) & SCORE_MASK) as u16
    }

    #[inline]
    pub fn from(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub fn to(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    /// Kind of the moving piece. Always present for generator output.
    #[inline]
    pub fn moved_piece(self) -> PieceKind {
        piece_kind_from_code((self.0 >> MOVED_PIECE_SHIFT) & PIECE_MASK).unwrap_or(PieceKind::Pawn)
    }

    #[inline]
    pub fn captured_piece(self) -> Option<PieceKind> {
        piece_kind_from_code((self.0 >> CAPTURED_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn promotion_piece(self) -> Option<PieceKind> {
        piece_kind_from_code((self.0 >> PROMOTION_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.promotion_piece().is_some()
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        self.0 & FLAG_CAPTURE != 0
    }

    #[inline]
    pub fn is_double_pawn_push(self) -> bool {
        self.0 & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub fn is_en_passant(self) -> bool {
        self.0 & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub fn is_castle(self) -> bool {
        self.0 & FLAG_CASTLING != 0
    }

    /// True when `from`, `to` and promotion agree; score and flags are ignored.
    #[inline]
    pub fn same_route(self, other: Move) -> bool {
        self.from() == other.from()
            && self.to() == other.to()
            && self.promotion_piece() == other.promotion_piece()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("from", &self.from())
            .field("to", &self.to())
            .field("moved", &self.moved_piece())
            .field("captured", &self.captured_piece())
            .field("promotion", &self.promotion_piece())
            .field("flags", &format_args!("{:#x}", (self.0 & FLAGS_MASK) >> 21))
            .field("score", &self.score())
            .finish()
    }
}

#[inline]
pub fn piece_kind_to_code(piece_kind: PieceKind) -> u64 {
    piece_kind.index() as u64
}

#[inline]
pub fn piece_kind_from_code(code: u64) -> Option<PieceKind> {
    PieceKind::from_index(code as usize)
}
