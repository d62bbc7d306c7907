use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::leaper_tables::pawn_attacks;
use crate::moves::move_descriptions::{
    Move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let enemy_occ = game_state.occupancy(side.opposite());
    let empty = !game_state.occupancy_all();

    let (forward, start_rank, promotion_rank): (i8, u8, u8) = match side {
        Color::White => (8, 1, 7),
        Color::Black => (-8, 6, 0),
    };

    for from in game_state.pieces(side, PieceKind::Pawn) {
        let one_step = (from as i8 + forward) as Square;

        if empty.test(one_step) {
            if square_rank(one_step) == promotion_rank {
                push_promotions(from, one_step, None, out);
            } else {
                out.push(Move::new(from, one_step, PieceKind::Pawn, None, None, 0));

                let two_step = (one_step as i8 + forward) as Square;
                if square_rank(from) == start_rank && empty.test(two_step) {
                    out.push(Move::new(
                        from,
                        two_step,
                        PieceKind::Pawn,
                        None,
                        None,
                        FLAG_DOUBLE_PAWN_PUSH,
                    ));
                }
            }
        }

        let attacks = pawn_attacks(side, from);
        for to in attacks & enemy_occ {
            let captured = enemy_piece_on(game_state, to);
            if square_rank(to) == promotion_rank {
                push_promotions(from, to, captured, out);
            } else {
                out.push(Move::new(from, to, PieceKind::Pawn, captured, None, FLAG_CAPTURE));
            }
        }

        if let Some(ep) = game_state.en_passant_square() {
            if attacks.test(ep) {
                out.push(Move::new(
                    from,
                    ep,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    FLAG_CAPTURE | FLAG_EN_PASSANT,
                ));
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, captured: Option<PieceKind>, out: &mut Vec<Move>) {
    let flags = if captured.is_some() { FLAG_CAPTURE } else { 0 };
    for promotion in PieceKind::PROMOTIONS {
        out.push(Move::new(from, to, PieceKind::Pawn, captured, Some(promotion), flags));
    }
}
