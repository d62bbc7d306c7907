//! Static evaluation.
//!
//! Search stays generic over `BoardScorer`, so alternate heuristics can be
//! swapped in without touching the search code.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::piece_attacks;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material plus one point per attacked square.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialMobilityScorer;

impl MaterialMobilityScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    fn side_total(game_state: &GameState, color: Color) -> i32 {
        let occupancy = game_state.occupancy_all();
        let mut total = 0i32;

        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            for square in game_state.pieces(color, kind) {
                total += Self::piece_value(kind);
                total += piece_attacks(piece, square, occupancy).count() as i32;
            }
        }

        total
    }

    #[inline]
    pub fn white_minus_black(game_state: &GameState) -> i32 {
        Self::side_total(game_state, Color::White) - Self::side_total(game_state, Color::Black)
    }
}

impl BoardScorer for MaterialMobilityScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_minus_black = Self::white_minus_black(game_state);
        match game_state.side_to_move() {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}
