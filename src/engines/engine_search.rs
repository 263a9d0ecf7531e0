//! Tree-search engine: iterative deepening over the recursive move tree.

use crate::engines::engine_trait::{Engine, EngineLimits, EngineOutput};
use crate::game_state::position::Position;
use crate::search::board_scoring::MATE_THRESHOLD;
use crate::search::tree_search::{iterative_deepening_search, SearchConfig};

#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    pub config: SearchConfig,
}

impl SearchEngine {
    pub fn new(max_depth: u32) -> Self {
        Self {
            config: SearchConfig {
                max_depth,
                ..SearchConfig::default()
            },
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }
}

impl Engine for SearchEngine {
    fn name(&self) -> &str {
        "Damson Search"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        limits: &EngineLimits,
    ) -> Result<EngineOutput, String> {
        let mut config = self.config;
        if let Some(depth) = limits.depth {
            config.max_depth = depth;
        }

        let result =
            iterative_deepening_search(position, config).map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "depth {} score {} cp",
            result.reached_depth, result.score
        ));
        if result.score.abs() >= MATE_THRESHOLD {
            out.info_lines.push("forced mate found".to_owned());
        }
        out.best_move = result.best_move;
        Ok(out)
    }
}
