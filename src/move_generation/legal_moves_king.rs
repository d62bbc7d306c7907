use crate::game_state::chess_rules::CASTLES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::leaper_tables::king_attacks;
use crate::moves::move_descriptions::{Move, FLAG_CASTLING};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let Some(from) = game_state.king_square(side) else {
        return;
    };

    let targets = king_attacks(from) - game_state.occupancy(side);
    push_target_moves(game_state, from, PieceKind::King, targets, out);

    generate_castling_moves(game_state, out, from);
}

/// A castle is offered only with its right set, king and rook at home, the
/// squares between them empty, and no attacked square on the king's path.
fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_from: Square) {
    let side = game_state.side_to_move();
    let enemy = side.opposite();
    let rooks = game_state.pieces(side, PieceKind::Rook);

    for castle in CASTLES.iter().filter(|castle| castle.color == side) {
        if !game_state.has_castling_right(castle.right)
            || king_from != castle.king_from
            || !rooks.test(castle.rook_from)
            || (game_state.occupancy_all() & castle.between).is_not_empty()
        {
            continue;
        }
        if castle
            .king_path
            .iter()
            .any(|square| is_square_attacked(game_state, *square, enemy))
        {
            continue;
        }
        out.push(Move::new(
            castle.king_from,
            castle.king_to,
            PieceKind::King,
            None,
            None,
            FLAG_CASTLING,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> Vec<(Square, Square)> {
        let game = GameState::from_fen(fen).expect("valid FEN");
        let mut out = Vec::new();
        generate_king_moves(&game, &mut out);
        out.into_iter()
            .filter(|m| m.is_castle())
            .map(|m| (m.from(), m.to()))
            .collect()
    }

    #[test]
    fn both_castles_offered_on_open_back_rank() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec![(4, 6), (4, 2)]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec![(60, 62), (60, 58)]);
    }

    #[test]
    fn cleared_right_blocks_castle() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"), vec![(4, 2)]);
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
    }

    #[test]
    fn occupied_path_blocks_castle() {
        // Knight on b1 blocks only the queenside.
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1"), vec![(4, 6)]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1"), vec![(4, 2)]);
    }

    #[test]
    fn attacked_start_transit_or_destination_blocks_castle() {
        // Start square attacked (in check).
        assert!(castles("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").is_empty());
        // Transit square f1 attacked.
        assert_eq!(castles("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1"), vec![(4, 2)]);
        // Destination square c1 attacked.
        assert_eq!(castles("4k3/8/8/8/8/8/2r5/R3K2R w KQ - 0 1"), vec![(4, 6)]);
        // An attacked b1 does not matter: the king never crosses it.
        assert_eq!(castles("4k3/8/8/8/8/8/1r6/R3K2R w KQ - 0 1"), vec![(4, 6), (4, 2)]);
    }

    #[test]
    fn missing_rook_blocks_castle_even_with_right() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1"), vec![(4, 6)]);
    }
}
