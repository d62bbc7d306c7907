//! Square conversions for coordinate notation (`e4` and friends).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{square_file, square_rank, Square};

/// Converts a coordinate such as `"e4"` to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let &[file, rank] = square.as_bytes() else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Converts a square index (`0..=63`) to a coordinate such as `"e4"`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'1' + square_rank(square));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(square_to_algebraic(0), "a1");
        assert_eq!(square_to_algebraic(63), "h8");
        assert_eq!(square_to_algebraic(20), "e3");
    }

    #[test]
    fn rejects_bad_coordinates() {
        for bad in ["", "e", "e44", "i1", "a9", "A1", "11"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(ChessError::InvalidSquare(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
