//! Precomputed attack sets for the non-sliding pieces.
//!
//! Knight, king, and pawn attacks depend only on the origin square (and, for
//! pawns, the color), so each is a `const` table indexed by square.

use crate::game_state::chess_types::{BitBoard, Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const WHITE_PAWN_OFFSETS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_OFFSETS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

pub const KNIGHT_ATTACKS: [BitBoard; 64] = build_leaper_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [BitBoard; 64] = build_leaper_table(&KING_OFFSETS);
pub const WHITE_PAWN_ATTACKS: [BitBoard; 64] = build_leaper_table(&WHITE_PAWN_OFFSETS);
pub const BLACK_PAWN_ATTACKS: [BitBoard; 64] = build_leaper_table(&BLACK_PAWN_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> BitBoard {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> BitBoard {
    KING_ATTACKS[square as usize]
}

/// Squares a `color` pawn on `square` attacks diagonally.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> BitBoard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn build_leaper_table(offsets: &[(i32, i32)]) -> [BitBoard; 64] {
    let mut table = [BitBoard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut bits = 0u64;
        let mut i = 0;

        while i < offsets.len() {
            let (df, dr) = offsets[i];
            let (f, r) = (file + df, rank + dr);
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }

        table[sq] = BitBoard(bits);
        sq += 1;
    }

    table
}
