//! Plain-text board diagram for diagnostics.

use crate::game_state::game_state::GameState;

/// Renders the board with rank 8 at the top, FEN letters for pieces and `.`
/// for empty squares.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        for file in 0..8u8 {
            out.push(' ');
            match game_state.piece_on(rank * 8 + file) {
                Some(piece) => out.push(piece.to_fen_char()),
                None => out.push('.'),
            }
        }
        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}
