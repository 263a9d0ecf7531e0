//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and lowest-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineLimits, EngineOutput};
use crate::game_state::position::Position;
use crate::move_generation::generator::legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Damson Random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _limits: &EngineLimits,
    ) -> Result<EngineOutput, String> {
        let moves = legal_moves(position);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("legal moves available: {}", moves.len()));

        if moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_always_picks_a_legal_move() {
        let position = Position::new_game();
        let legal = legal_moves(&position);
        let mut engine = RandomEngine;

        for _ in 0..20 {
            let out = engine
                .choose_move(&position, &EngineLimits::default())
                .expect("choosing should succeed");
            let best = out.best_move.expect("the start position has moves");
            assert!(legal.contains(&best));
        }
    }

    #[test]
    fn random_engine_reports_no_move_when_mated() {
        let mated = Position::from_fen("k6R/8/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = RandomEngine;
        let out = engine
            .choose_move(&mated, &EngineLimits::default())
            .expect("choosing should succeed");
        assert_eq!(out.best_move, None);
    }
}
