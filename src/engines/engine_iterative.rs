use std::time::Duration;

use crate::config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::board_scoring::MaterialMobilityScorer;
use crate::search::iterative_deepening::{
    is_mate_score, iterative_deepening_search, SearchConfig, MATE_SCORE,
};

/// Iterative-deepening alpha-beta engine over the pseudo-legal generator and
/// the material + mobility evaluator.
pub struct IterativeEngine {
    config: EngineConfig,
    move_generator: PseudoLegalMoveGenerator,
    scorer: MaterialMobilityScorer,
}

impl IterativeEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            move_generator: PseudoLegalMoveGenerator,
            scorer: MaterialMobilityScorer,
        }
    }

    /// Request limits resolved against the engine defaults.
    pub fn search_config(&self, params: &GoParams) -> SearchConfig {
        let depth = params.depth.unwrap_or(self.config.default_depth).max(1);
        let movetime_ms = params.movetime_ms.or(self.config.default_movetime_ms);
        SearchConfig {
            max_depth: depth,
            time_budget: movetime_ms.map(Duration::from_millis),
            alpha_beta: true,
        }
    }
}

impl Engine for IterativeEngine {
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> EngineOutput {
        let config = self.search_config(params);
        let result =
            iterative_deepening_search(game_state, &self.move_generator, &self.scorer, config);

        let score = if is_mate_score(result.best_score) {
            let plies = MATE_SCORE - result.best_score.abs();
            let signed = if result.best_score > 0 { plies } else { -plies };
            format!("mate {signed}")
        } else {
            format!("cp {}", result.best_score)
        };

        EngineOutput {
            best_move: result.best_move,
            info_lines: vec![format!(
                "info depth {} score {} nodes {} prunes {} time {}",
                result.reached_depth, score, result.stats.nodes, result.stats.prunes, result.elapsed_ms
            )],
        }
    }
}
