//! Perft: exhaustive leaf counting to a fixed depth.
//!
//! `perft` walks the tree with copy-on-branch and tallies leaf categories.
//! `perft_in_place` walks the same tree with `make_move` / `unmake_move`, so
//! agreement between the two checks the in-place pair against `apply_move`.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_legal_moves, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: Move, game_after_move: &GameState) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
        if is_king_in_check(game_after_move, game_after_move.side_to_move()) {
            self.checks += 1;
            if generate_legal_moves(game_after_move).is_empty() {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(generator, game_state, depth, &mut counts);
    counts
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    for mv in generator.generate_moves(game_state) {
        let Some(next) = game_state.apply_move(mv) else {
            continue;
        };
        if depth == 1 {
            counts.record_leaf(mv, &next);
        } else {
            perft_recurse(generator, &next, depth - 1, counts);
        }
    }
}

/// Leaf count using the in-place make/unmake pair on a single board.
pub fn perft_in_place<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mover = game_state.side_to_move();
    let mut nodes = 0;
    for mv in generator.generate_moves(game_state) {
        let undo = game_state.make_move(mv);
        if !is_king_in_check(game_state, mover) {
            nodes += perft_in_place(generator, game_state, depth - 1);
        }
        game_state.unmake_move(mv, undo);
    }
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_legal_moves(game_state)
        .into_iter()
        .map(|(mv, next)| (mv, perft(generator, &next, depth - 1).nodes))
        .collect()
}
