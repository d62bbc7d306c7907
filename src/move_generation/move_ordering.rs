//! Move ordering scores.
//!
//! Every generated move carries a score from one of six bands so a single
//! descending sort puts castles first, then promotions, then captures ordered
//! by most-valuable-victim / least-valuable-attacker, then double pushes.

use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::Move;

pub const CASTLE_SCORE: u16 = 30_000;
pub const CAPTURE_PROMOTION_BASE: u16 = 20_000;
pub const QUIET_PROMOTION_BASE: u16 = 10_000;
pub const CAPTURE_BASE: u16 = 1_000;
pub const DOUBLE_PAWN_PUSH_SCORE: u16 = 100;
pub const QUIET_SCORE: u16 = 0;

/// `MVV_LVA[victim][attacker]`; the victim term dominates.
pub const MVV_LVA: [[u16; 6]; 6] = build_mvv_lva();

const fn build_mvv_lva() -> [[u16; 6]; 6] {
    let mut table = [[0u16; 6]; 6];
    let mut victim = 0;
    while victim < 6 {
        let mut attacker = 0;
        while attacker < 6 {
            table[victim][attacker] = 10 * (victim as u16 + 1) + (6 - attacker as u16);
            attacker += 1;
        }
        victim += 1;
    }
    table
}

#[inline]
fn mvv_lva(victim: PieceKind, attacker: PieceKind) -> u16 {
    MVV_LVA[victim.index()][attacker.index()]
}

/// Queen 4, rook 3, bishop 2, knight 1.
#[inline]
fn promotion_rank(kind: PieceKind) -> u16 {
    kind.index() as u16
}

pub fn score_move(mv: Move) -> u16 {
    if mv.is_castle() {
        return CASTLE_SCORE;
    }

    let victim = mv.captured_piece();
    match (mv.promotion_piece(), victim) {
        (Some(promotion), Some(victim)) => {
            CAPTURE_PROMOTION_BASE + promotion_rank(promotion) + mvv_lva(victim, mv.moved_piece())
        }
        (Some(promotion), None) => QUIET_PROMOTION_BASE + promotion_rank(promotion),
        (None, Some(victim)) => CAPTURE_BASE + mvv_lva(victim, mv.moved_piece()),
        (None, None) if mv.is_double_pawn_push() => DOUBLE_PAWN_PUSH_SCORE,
        (None, None) => QUIET_SCORE,
    }
}

/// Scores every move and sorts descending. Ties keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    for mv in moves.iter_mut() {
        *mv = mv.with_score(score_move(*mv));
    }
    moves.sort_by_key(|mv| std::cmp::Reverse(mv.score()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH};

    #[test]
    fn victim_dominates_attacker() {
        // Pawn takes queen beats queen takes rook beats queen takes pawn.
        let pxq = mvv_lva(PieceKind::Queen, PieceKind::Pawn);
        let qxr = mvv_lva(PieceKind::Rook, PieceKind::Queen);
        let qxp = mvv_lva(PieceKind::Pawn, PieceKind::Queen);
        assert!(pxq > qxr && qxr > qxp);
        assert!(mvv_lva(PieceKind::Rook, PieceKind::Pawn) > mvv_lva(PieceKind::Rook, PieceKind::Knight));
        assert_eq!(MVV_LVA[0][5], 11);
    }

    #[test]
    fn bands_sort_in_priority_order() {
        let quiet = Move::new(6, 21, PieceKind::Knight, None, None, 0);
        let double = Move::new(12, 28, PieceKind::Pawn, None, None, FLAG_DOUBLE_PAWN_PUSH);
        let capture = Move::new(28, 35, PieceKind::Pawn, Some(PieceKind::Queen), None, FLAG_CAPTURE);
        let knight_promo = Move::new(52, 60, PieceKind::Pawn, None, Some(PieceKind::Knight), 0);
        let queen_promo = Move::new(52, 60, PieceKind::Pawn, None, Some(PieceKind::Queen), 0);
        let capture_promo =
            Move::new(52, 61, PieceKind::Pawn, Some(PieceKind::Pawn), Some(PieceKind::Knight), FLAG_CAPTURE);
        let castle = Move::new(4, 6, PieceKind::King, None, None, FLAG_CASTLING);

        let mut moves = vec![quiet, double, capture, knight_promo, queen_promo, capture_promo, castle];
        order_moves(&mut moves);

        let expected = [castle, capture_promo, queen_promo, knight_promo, capture, double, quiet];
        for (got, want) in moves.iter().zip(expected) {
            assert!(got.same_route(want), "got {got:?}, wanted {want:?}");
        }
    }

    #[test]
    fn equal_scores_keep_generation_order() {
        let first = Move::new(1, 18, PieceKind::Knight, None, None, 0);
        let second = Move::new(6, 21, PieceKind::Knight, None, None, 0);
        let mut moves = vec![first, second];
        order_moves(&mut moves);
        assert_eq!(moves[0].from(), 1);
        assert_eq!(moves[1].from(), 6);
    }
}
