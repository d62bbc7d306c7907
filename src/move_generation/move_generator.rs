//! Move generator interface and the pseudo-legal implementation.
//!
//! Generated moves follow movement and blocking rules only; a move that leaves
//! the mover's king attacked is discarded later when `GameState::apply_move`
//! returns `None`. Castling is the exception: its path checks happen here.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::generate_piece_moves;
use crate::move_generation::move_ordering::order_moves;
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator: Send + Sync {
    /// Pseudo-legal moves for the side to move, best-first.
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        generate_pawn_moves(game_state, &mut moves);
        generate_piece_moves(game_state, &mut moves);
        generate_king_moves(game_state, &mut moves);

        order_moves(&mut moves);
        moves
    }
}

/// Ordered legal moves paired with the position each one produces.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<(Move, GameState)> {
    PseudoLegalMoveGenerator
        .generate_moves(game_state)
        .into_iter()
        .filter_map(|mv| game_state.apply_move(mv).map(|next| (mv, next)))
        .collect()
}
