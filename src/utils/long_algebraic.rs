//! Coordinate move notation: `<from><to>[q|r|b|n]`.
//!
//! Parsing resolves the text against the legal moves of the position, so the
//! returned `Move` carries the same flags and ordering score the generator
//! would have produced. Castling is written as the king's own move.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = square_to_algebraic(mv.from());
    out.push_str(&square_to_algebraic(mv.to()));
    if let Some(promotion) = mv.promotion_piece() {
        out.push(promotion.to_char());
    }
    out
}

/// Parses `text` and finds the matching legal move.
///
/// Text that cannot name any move is `MalformedMove` / `InvalidSquare`; a
/// well-formed move absent from the legal list is `IllegalMove`.
pub fn parse_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::MalformedMove(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(ChessError::MalformedMove(text.to_owned())),
        },
    };

    generate_legal_moves(game_state)
        .into_iter()
        .map(|(mv, _)| mv)
        .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
}
