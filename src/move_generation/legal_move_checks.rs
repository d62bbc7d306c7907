//! Attack and check queries against a position.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::{bishop_attacks, rook_attacks};
use crate::moves::leaper_tables::{king_attacks, knight_attacks, pawn_attacks};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_square(color)
}

/// A side without a king is reported as in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return true;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any `attacker_color` piece attacks `square` given the current
/// occupancy. Each test looks outward from `square` with the attacker's
/// pattern reversed, so no attacker is iterated.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let occupancy = game_state.occupancy_all();
    let attackers = |kind: PieceKind| game_state.pieces(attacker_color, kind);

    // A pawn of `attacker_color` hits `square` iff a pawn of the other color
    // standing on `square` would hit the pawn.
    if (pawn_attacks(attacker_color.opposite(), square) & attackers(PieceKind::Pawn)).is_not_empty() {
        return true;
    }

    if (knight_attacks(square) & attackers(PieceKind::Knight)).is_not_empty() {
        return true;
    }

    if (king_attacks(square) & attackers(PieceKind::King)).is_not_empty() {
        return true;
    }

    let queens = attackers(PieceKind::Queen);
    if (bishop_attacks(square, occupancy) & (attackers(PieceKind::Bishop) | queens)).is_not_empty() {
        return true;
    }

    (rook_attacks(square, occupancy) & (attackers(PieceKind::Rook) | queens)).is_not_empty()
}
