//! 64-bit square set used for every board-shaped quantity in the engine.
//!
//! Square indexing is `0 == a1`, `7 == h1`, `56 == a8`, `63 == h8`. All
//! operations are total over `0..=63`; callers are responsible for never
//! passing an index outside that range.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not, Sub};

use crate::game_state::chess_types::Square;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard(0);
    pub const FULL: BitBoard = BitBoard(u64::MAX);

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        BitBoard(1u64 << square)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << square);
    }

    #[inline]
    pub const fn test(self, square: Square) -> bool {
        (self.0 >> square) & 1 != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Lowest set square, or `None` for the empty set.
    #[inline]
    pub const fn find_first_set(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as Square)
        }
    }

    /// Removes and returns the lowest set square.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        let square = self.find_first_set()?;
        self.0 &= self.0 - 1;
        Some(square)
    }

    /// Squares in `self` that are not in `other`.
    #[inline]
    pub const fn without(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 & !other.0)
    }

    #[inline]
    pub const fn iter(self) -> BitBoardIter {
        BitBoardIter(self.0)
    }
}

/// Iterates set squares from lowest to highest.
pub struct BitBoardIter(u64);

impl Iterator for BitBoardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for BitBoard {
    type Item = Square;
    type IntoIter = BitBoardIter;

    fn into_iter(self) -> BitBoardIter {
        self.iter()
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn bitor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, rhs: BitBoard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn bitand(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 & rhs.0)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, rhs: BitBoard) {
        self.0 &= rhs.0;
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn bitxor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 ^ rhs.0)
    }
}

impl Not for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl Sub for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn sub(self, rhs: BitBoard) -> BitBoard {
        self.without(rhs)
    }
}

impl fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard({:#018x})", self.0)
    }
}

/// Renders rank 8 at the top, `1` for set squares and `.` otherwise.
impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let ch = if self.test(rank * 8 + file) { '1' } else { '.' };
                write!(f, "{ch}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
