//! Pseudo-legal queen move generation over all eight rays.

use crate::board::bitboard::QUEEN_DIRECTIONS;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::slider_moves::generate_slider_moves;
use crate::moves::move_encoding::Move;

pub fn generate_queen_moves(position: &Position, us: Color, out: &mut Vec<Move>) {
    let queens = position.pieces(us, PieceKind::Queen);
    generate_slider_moves(position, us, queens, &QUEEN_DIRECTIONS, out);
}
