//! Pseudo-legal rook move generation over the four orthogonal rays.

use crate::board::bitboard::ROOK_DIRECTIONS;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::slider_moves::generate_slider_moves;
use crate::moves::move_encoding::Move;

pub fn generate_rook_moves(position: &Position, us: Color, out: &mut Vec<Move>) {
    let rooks = position.pieces(us, PieceKind::Rook);
    generate_slider_moves(position, us, rooks, &ROOK_DIRECTIONS, out);
}
