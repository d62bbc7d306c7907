use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Everything a move can destroy that cannot be recomputed from the move
/// itself. Captured pieces are already carried by the packed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
