//! Process-wide attack lookups.
//!
//! The magic tables for bishops and rooks are discovered once, on first use,
//! and shared read-only afterwards. Leaper attacks come straight from the
//! `const` tables in `leaper_tables`.

use std::sync::OnceLock;

use log::debug;

use crate::game_state::chess_types::{BitBoard, Piece, PieceKind, Square};
use crate::moves::leaper_tables::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::magic::{build_slider_table, magic_rng, SliderTable};
use crate::moves::sliding_rays::Slider;

pub struct AttackTables {
    pub bishop: SliderTable,
    pub rook: SliderTable,
}

static ATTACK_TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Shared tables, built on first call.
pub fn attack_tables() -> &'static AttackTables {
    ATTACK_TABLES.get_or_init(|| {
        let mut rng = magic_rng();
        let bishop = build_slider_table(Slider::Bishop, &mut rng);
        let rook = build_slider_table(Slider::Rook, &mut rng);
        debug!(
            "magic attack tables ready ({} bishop + {} rook slots)",
            bishop.attacks.len(),
            rook.attacks.len()
        );
        AttackTables { bishop, rook }
    })
}

/// Forces table construction up front so the first search is not charged for it.
pub fn init_attack_tables() {
    attack_tables();
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: BitBoard) -> BitBoard {
    attack_tables().bishop.attacks(square, occupancy)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: BitBoard) -> BitBoard {
    attack_tables().rook.attacks(square, occupancy)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: BitBoard) -> BitBoard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Attack set of `piece` standing on `square` with the given blockers.
/// Pawns report their diagonal captures only.
pub fn piece_attacks(piece: Piece, square: Square, occupancy: BitBoard) -> BitBoard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}
