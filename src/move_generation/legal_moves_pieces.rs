//! Knight, bishop, rook, and queen moves: attack set minus own pieces.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::attack_tables::piece_attacks;
use crate::moves::move_descriptions::Move;

const PIECE_ORDER: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn generate_piece_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let own_occ = game_state.occupancy(side);
    let occupancy = game_state.occupancy_all();

    for kind in PIECE_ORDER {
        let piece = Piece::new(side, kind);
        for from in game_state.pieces(side, kind) {
            let targets = piece_attacks(piece, from, occupancy) - own_occ;
            push_target_moves(game_state, from, kind, targets, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_only_knight_moves() {
        let mut out = Vec::new();
        generate_piece_moves(&GameState::new_game(), &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|m| m.moved_piece() == PieceKind::Knight));
    }

    #[test]
    fn central_queen_captures_but_does_not_pass_blockers() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/3Q4/8/4K3 w - - 0 1").expect("valid FEN");
        let mut out = Vec::new();
        generate_piece_moves(&game, &mut out);
        let up_the_file: Vec<&Move> = out.iter().filter(|m| m.to() % 8 == 3 && m.to() > 19).collect();
        assert_eq!(up_the_file.len(), 2); // d4 and the capture on d5
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
    }
}
