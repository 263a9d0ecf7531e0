//! Pseudo-legal bishop move generation over the four diagonal rays.

use crate::board::bitboard::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::slider_moves::generate_slider_moves;
use crate::moves::move_encoding::Move;

pub fn generate_bishop_moves(position: &Position, us: Color, out: &mut Vec<Move>) {
    let bishops = position.pieces(us, PieceKind::Bishop);
    generate_slider_moves(position, us, bishops, &BISHOP_DIRECTIONS, out);
}
