use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, FLAG_CAPTURE};

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    game_state.piece_kind_on(game_state.side_to_move().opposite(), square)
}

/// Pushes one move per square in `targets`, flagging captures.
/// `targets` must already exclude the mover's own pieces.
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    targets: BitBoard,
    out: &mut Vec<Move>,
) {
    for to in targets {
        let captured = enemy_piece_on(game_state, to);
        let flags = if captured.is_some() { FLAG_CAPTURE } else { 0 };
        out.push(Move::new(from, to, kind, captured, None, flags));
    }
}
