//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Each iteration is a full fixed-depth negamax pass from the root. An
//! iteration's answer replaces the current one only if it finished inside the
//! time budget; a partially searched depth is thrown away. The wall clock is
//! read once every `TIME_CHECK_INTERVAL` nodes, and an aborted subtree unwinds
//! as `None` so no partial score can be mistaken for a real one.

use std::time::{Duration, Instant};

use log::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;

pub const MATE_SCORE: i32 = 100_000;
pub const INFINITY: i32 = 1_000_000;
pub const MAX_PLY: u8 = 128;
pub const TIME_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_budget: Option<Duration>,
    /// Disabling pruning gives a full-width search with identical results.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_budget: None,
            alpha_beta: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub prunes: u64,
    pub mates: u64,
    pub illegal_moves: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub stats: SearchStats,
    pub elapsed_ms: u64,
}

/// True for scores inside the mate band of either side.
#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE - i32::from(MAX_PLY)
}

/// Score for a side with no legal move: mated at `ply`, or stalemated.
#[inline]
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if is_king_in_check(game_state, game_state.side_to_move()) {
        -(MATE_SCORE - i32::from(ply))
    } else {
        0
    }
}

pub fn iterative_deepening_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started_at = Instant::now();
    let mut searcher = Searcher {
        generator,
        scorer,
        deadline: config.time_budget.map(|budget| started_at + budget),
        alpha_beta: config.alpha_beta,
        stats: SearchStats::default(),
        aborted: false,
    };

    // Fallback answer: first legal move in generation order.
    let fallback = generator
        .generate_moves(game_state)
        .into_iter()
        .find(|mv| game_state.apply_move(*mv).is_some());

    let mut result = SearchResult {
        best_move: fallback,
        best_score: match fallback {
            Some(_) => scorer.score(game_state),
            None => terminal_score(game_state, 0),
        },
        ..SearchResult::default()
    };

    if fallback.is_some() {
        for depth in 1..=config.max_depth.min(MAX_PLY) {
            if searcher.deadline_passed() {
                debug!("time budget spent before depth {depth}");
                break;
            }

            let Some((best_move, best_score)) = searcher.search_root(game_state, depth) else {
                debug!(
                    "depth {depth} aborted after {} nodes; keeping depth {} answer",
                    searcher.stats.nodes, result.reached_depth
                );
                break;
            };

            result.best_move = Some(best_move);
            result.best_score = best_score;
            result.reached_depth = depth;
            debug!(
                "depth {depth} complete: score {best_score} nodes {} prunes {} ({} ms)",
                searcher.stats.nodes,
                searcher.stats.prunes,
                started_at.elapsed().as_millis()
            );

            // A mate found at this depth is the fastest one available.
            if best_score >= MATE_SCORE - i32::from(MAX_PLY) {
                break;
            }
        }
    }

    result.stats = searcher.stats;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result
}

struct Searcher<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    deadline: Option<Instant>,
    alpha_beta: bool,
    stats: SearchStats,
    aborted: bool,
}

impl<G: MoveGenerator, S: BoardScorer> Searcher<'_, G, S> {
    #[inline]
    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Full-window search of every root move. `None` if the budget ran out.
    fn search_root(&mut self, game_state: &GameState, depth: u8) -> Option<(Move, i32)> {
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in self.generator.generate_moves(game_state) {
            let Some(next) = game_state.apply_move(mv) else {
                self.stats.illegal_moves += 1;
                continue;
            };

            let score = -self.negamax(&next, depth - 1, -beta, -alpha, 1)?;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    fn negamax(
        &mut self,
        game_state: &GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> Option<i32> {
        self.stats.nodes += 1;
        if self.aborted {
            return None;
        }
        if self.stats.nodes % TIME_CHECK_INTERVAL == 0 && self.deadline_passed() {
            self.aborted = true;
            return None;
        }

        if depth == 0 || ply >= MAX_PLY {
            return Some(self.leaf_score(game_state, ply));
        }

        let mut best = -INFINITY;
        let mut any_legal = false;

        for mv in self.generator.generate_moves(game_state) {
            let Some(next) = game_state.apply_move(mv) else {
                self.stats.illegal_moves += 1;
                continue;
            };
            any_legal = true;

            let score = -self.negamax(&next, depth - 1, -beta, -alpha, ply + 1)?;
            best = best.max(score);
            alpha = alpha.max(score);
            if self.alpha_beta && alpha >= beta {
                self.stats.prunes += 1;
                break;
            }
        }

        if !any_legal {
            let score = terminal_score(game_state, ply);
            if score != 0 {
                self.stats.mates += 1;
            }
            return Some(score);
        }

        Some(best)
    }

    /// Horizon score. A side with no legal move is scored as mated or
    /// stalemated, so mating lines dominate material and horizon stalemates
    /// count as draws.
    fn leaf_score(&mut self, game_state: &GameState, ply: u8) -> i32 {
        if !self.has_legal_move(game_state) {
            let score = terminal_score(game_state, ply);
            if score != 0 {
                self.stats.mates += 1;
            }
            return score;
        }
        self.stats.evaluations += 1;
        self.scorer.score(game_state)
    }

    fn has_legal_move(&self, game_state: &GameState) -> bool {
        self.generator
            .generate_moves(game_state)
            .into_iter()
            .any(|mv| game_state.apply_move(mv).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::{generate_legal_moves, PseudoLegalMoveGenerator};
    use crate::search::board_scoring::MaterialMobilityScorer;
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn search(fen: &str, config: SearchConfig) -> (GameState, SearchResult) {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let result =
            iterative_deepening_search(&game, &PseudoLegalMoveGenerator, &MaterialMobilityScorer, config);
        (game, result)
    }

    fn depth(max_depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth,
            ..SearchConfig::default()
        }
    }

    fn searcher() -> Searcher<'static, PseudoLegalMoveGenerator, MaterialMobilityScorer> {
        Searcher {
            generator: &PseudoLegalMoveGenerator,
            scorer: &MaterialMobilityScorer,
            deadline: None,
            alpha_beta: true,
            stats: SearchStats::default(),
            aborted: false,
        }
    }

    fn delivers_mate(game: &GameState, mv: Move) -> bool {
        let next = game.apply_move(mv).expect("best move should be legal");
        generate_legal_moves(&next).is_empty() && is_king_in_check(&next, next.side_to_move())
    }

    #[test]
    fn depth_zero_returns_a_legal_move_and_the_static_score() {
        let (game, result) = search("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", depth(0));
        let best = result.best_move.expect("legal moves exist");
        assert!(game.apply_move(best).is_some());
        assert_eq!(result.best_score, 0);
        assert_eq!(result.reached_depth, 0);
    }

    #[test]
    fn search_prefers_winning_capture_in_simple_position() {
        let (_, result) = search("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1", depth(1));
        let best = result.best_move.expect("best move should exist");
        assert_eq!(move_to_long_algebraic(best), "f1e2");
    }

    #[test]
    fn mate_in_one_found_at_depth_one() {
        let (game, result) = search("k7/8/1K6/8/8/8/8/5Q2 w - - 0 1", depth(1));
        let best = result.best_move.expect("best move should exist");
        assert!(delivers_mate(&game, best));
        assert_eq!(result.best_score, MATE_SCORE - 1);
        assert!(is_mate_score(result.best_score));
        assert!(result.stats.mates > 0);
    }

    #[test]
    fn mate_in_one_preferred_over_slower_mates() {
        // Rh8 mates at once; Kb6 lines also mate later. A full depth-3 root
        // pass sees both and must rank the one-move mate highest.
        let game = GameState::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").expect("FEN should parse");
        let mut searcher = searcher();

        let (best, score) = searcher.search_root(&game, 3).expect("no budget, no abort");
        assert_eq!(move_to_long_algebraic(best), "h1h8");
        assert!(delivers_mate(&game, best));
        assert_eq!(score, MATE_SCORE - 1);

        let (game, result) = search("k7/8/1K6/8/8/8/8/5Q2 w - - 0 1", depth(3));
        assert!(delivers_mate(&game, result.best_move.expect("best move should exist")));
        assert_eq!(result.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn checkmated_root_reports_no_move_and_a_mate_score() {
        let (_, result) = search("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1", depth(3));
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, -MATE_SCORE);
    }

    #[test]
    fn stalemate_scores_exactly_zero() {
        let (_, result) = search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", depth(3));
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert!(!is_mate_score(result.best_score));
    }

    #[test]
    fn stalemate_at_the_horizon_is_a_draw() {
        // Black king a1 boxed in by its own pawn and the c2 king.
        let game = GameState::from_fen("8/8/8/8/8/8/p1K5/k7 b - - 0 1").expect("FEN should parse");
        let mut searcher = searcher();

        assert_eq!(searcher.leaf_score(&game, 1), 0);
        assert_eq!(searcher.negamax(&game, 1, -INFINITY, INFINITY, 1), Some(0));
        assert_eq!(searcher.stats.mates, 0);
        assert_eq!(searcher.stats.evaluations, 0);
    }

    #[test]
    fn checkmate_at_the_horizon_is_scored_by_ply() {
        let game = GameState::from_fen("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut searcher = searcher();

        assert_eq!(searcher.leaf_score(&game, 3), -(MATE_SCORE - 3));
        assert_eq!(searcher.stats.mates, 1);
    }

    #[test]
    fn winning_side_avoids_the_stalemating_move() {
        // Qf7 stalemates the h8 king; Qf8 mates.
        let (game, result) = search("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1", depth(2));
        let best = result.best_move.expect("best move should exist");
        assert_ne!(move_to_long_algebraic(best), "f1f7");
        assert!(delivers_mate(&game, best));
        assert!(result.best_score > 0);
    }

    #[test]
    fn pruning_does_not_change_the_answer() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let (_, pruned) = search(fen, depth(3));
            let (_, full) = search(
                fen,
                SearchConfig {
                    max_depth: 3,
                    alpha_beta: false,
                    ..SearchConfig::default()
                },
            );

            let pruned_move = pruned.best_move.expect("move");
            let full_move = full.best_move.expect("move");
            assert!(pruned_move.same_route(full_move), "best move differs for {fen}");
            assert_eq!(pruned.best_score, full.best_score, "score differs for {fen}");
            assert!(pruned.stats.prunes > 0);
            assert_eq!(full.stats.prunes, 0);
            assert!(pruned.stats.nodes < full.stats.nodes);
        }
    }

    #[test]
    fn exhausted_budget_still_returns_first_legal_move() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let (game, result) = search(
            fen,
            SearchConfig {
                max_depth: 6,
                time_budget: Some(Duration::ZERO),
                alpha_beta: true,
            },
        );

        let expected = generate_legal_moves(&game)[0].0;
        assert_eq!(result.reached_depth, 0);
        assert_eq!(result.best_move, Some(expected));
    }

    #[test]
    fn short_budget_keeps_last_completed_depth() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let (game, result) = search(
            fen,
            SearchConfig {
                max_depth: 40,
                time_budget: Some(Duration::from_millis(50)),
                alpha_beta: true,
            },
        );

        let best = result.best_move.expect("legal moves exist");
        assert!(game.apply_move(best).is_some());
        assert!(result.reached_depth < 40);
    }
}
