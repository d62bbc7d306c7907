//! Engine abstraction used by the command protocol.
//!
//! Defines the per-request search limits and the output payload so the
//! protocol layer does not depend on a particular search implementation.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Limits for one move request; `None` falls back to the engine's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> EngineOutput;
}
