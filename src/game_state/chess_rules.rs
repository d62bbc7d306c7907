//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry, and the per-square castling-rights
//! masks used to clear rights when a king or rook home square is touched.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const A1: Square = 0;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

/// Geometry of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSpec {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: BitBoard,
    /// King start, transit, and destination; none may be attacked.
    pub king_path: [Square; 3],
}

pub const CASTLES: [CastleSpec; 4] = [
    CastleSpec {
        color: Color::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: E1,
        king_to: G1,
        rook_from: H1,
        rook_to: F1,
        between: BitBoard((1 << F1) | (1 << G1)),
        king_path: [E1, F1, G1],
    },
    CastleSpec {
        color: Color::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: E1,
        king_to: C1,
        rook_from: A1,
        rook_to: D1,
        between: BitBoard((1 << 1) | (1 << C1) | (1 << D1)),
        king_path: [E1, D1, C1],
    },
    CastleSpec {
        color: Color::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: E8,
        king_to: G8,
        rook_from: H8,
        rook_to: F8,
        between: BitBoard((1 << F8) | (1 << G8)),
        king_path: [E8, F8, G8],
    },
    CastleSpec {
        color: Color::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: E8,
        king_to: C8,
        rook_from: A8,
        rook_to: D8,
        between: BitBoard((1 << 57) | (1 << C8) | (1 << D8)),
        king_path: [E8, D8, C8],
    },
];

/// Castle whose king travels `from -> to`, if any.
pub fn castle_for_king_move(from: Square, to: Square) -> Option<&'static CastleSpec> {
    CASTLES
        .iter()
        .find(|castle| castle.king_from == from && castle.king_to == to)
}

/// `rights &= CASTLING_RIGHTS_MASK[square]` whenever `square` is vacated or captured on.
pub const CASTLING_RIGHTS_MASK: [CastlingRights; 64] = build_castling_rights_mask();

const fn build_castling_rights_mask() -> [CastlingRights; 64] {
    let mut table = [CASTLE_ALL; 64];
    table[A1 as usize] = CASTLE_ALL & !CASTLE_WHITE_QUEENSIDE;
    table[H1 as usize] = CASTLE_ALL & !CASTLE_WHITE_KINGSIDE;
    table[E1 as usize] = CASTLE_ALL & !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    table[A8 as usize] = CASTLE_ALL & !CASTLE_BLACK_QUEENSIDE;
    table[H8 as usize] = CASTLE_ALL & !CASTLE_BLACK_KINGSIDE;
    table[E8 as usize] = CASTLE_ALL & !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_mask_only_touches_home_squares() {
        let untouched = (0..64u8)
            .filter(|sq| CASTLING_RIGHTS_MASK[*sq as usize] == CASTLE_ALL)
            .count();
        assert_eq!(untouched, 58);
        assert_eq!(CASTLING_RIGHTS_MASK[E8 as usize] & CASTLE_BLACK_KINGSIDE, 0);
        assert_ne!(CASTLING_RIGHTS_MASK[E8 as usize] & CASTLE_WHITE_KINGSIDE, 0);
    }

    #[test]
    fn castle_lookup_by_king_squares() {
        let castle = castle_for_king_move(E1, C1).expect("white queenside castle exists");
        assert_eq!(castle.rook_from, A1);
        assert_eq!(castle.rook_to, D1);
        assert!(castle_for_king_move(E1, F1).is_none());
    }
}
