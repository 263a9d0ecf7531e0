//! Engine abstraction layer used by the CLI game loop.
//!
//! Defines common input limits and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::position::Position;
use crate::moves::move_encoding::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineLimits {
    /// Nominal search depth override; engines fall back to their own default.
    pub depth: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    /// Human-readable diagnostics for the caller to print.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(
        &mut self,
        position: &Position,
        limits: &EngineLimits,
    ) -> Result<EngineOutput, String>;
}
