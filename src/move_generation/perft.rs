//! Perft: exact legal-move-tree node counting, independent of search and
//! evaluation. Used as the movegen correctness oracle in tests and benches.

use crate::chess_errors::ChessErrors;
use crate::game_state::position::Position;
use crate::move_generation::generator::legal_moves;
use crate::moves::move_encoding::{move_kind, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

pub fn perft(position: &Position, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(position, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse(
    position: &Position,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    for mv in legal_moves(position) {
        if depth == 1 {
            counts.nodes += 1;
            if position.is_capture(mv) {
                counts.captures += 1;
            }
            match move_kind(mv) {
                MoveKind::EnPassant => counts.en_passant += 1,
                MoveKind::Castling => counts.castles += 1,
                MoveKind::Promotion => counts.promotions += 1,
                MoveKind::Normal => {}
            }
            continue;
        }

        let mut next = position.clone();
        next.do_move(mv)?;
        perft_recurse(&next, depth - 1, counts)?;
    }
    Ok(())
}
