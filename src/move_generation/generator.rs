//! The move generation pipeline: piece-wise pseudo-legal enumeration
//! followed by the simulate-and-test legality filter.

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;
use crate::moves::move_encoding::Move;

/// Every move obeying piece-movement shape for `us`, in fixed piece-type
/// order (pawns, knights, bishops, rooks, queens, king). Some of these may
/// leave the mover's own king attacked.
pub fn pseudo_legal_moves(position: &Position, us: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_pawn_moves(position, us, &mut out);
    generate_knight_moves(position, us, &mut out);
    generate_bishop_moves(position, us, &mut out);
    generate_rook_moves(position, us, &mut out);
    generate_queen_moves(position, us, &mut out);
    generate_king_moves(position, us, &mut out);
    out
}

/// Legal moves for the side to move: each pseudo-legal move is applied
/// temporarily on a probe copy and kept only if the mover's own king ends
/// up unattacked.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    let mut probe = position.clone();
    pseudo_legal_moves(position, us)
        .into_iter()
        .filter(|&mv| probe.is_legal_for(mv, us))
        .collect()
}

/// Legal moves "as if" `color` were to move, used for castling-path attack
/// probes and mobility scoring. When probing out of turn the opponent's
/// en-passant option is suppressed, since it is not actually their turn.
pub fn legal_moves_for(position: &Position, color: Color) -> Vec<Move> {
    let mut probe = position.clone();
    if color != probe.side_to_move {
        probe.en_passant_square = None;
    }
    pseudo_legal_moves(&probe, color)
        .into_iter()
        .filter(|&mv| probe.is_legal_for(mv, color))
        .collect()
}
