//! Shared slider generation for bishops, rooks, and queens.
//!
//! Per direction the whole slider set is shifted one step at a time; pieces
//! that reach an enemy emit a capture and drop out, pieces that reach any
//! occupant drop out, and the survivors keep sliding. The accumulated step
//! count recovers each origin from its destination.

use crate::board::bitboard::{pop_lsb, Bitboard, Direction};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::move_encoding::{encode_move, Move, MoveKind};

pub(crate) fn generate_slider_moves(
    position: &Position,
    us: Color,
    sliders: Bitboard,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    let enemies = position.pieces_of_color(us.opposite());
    let empty = !position.occupied();

    for &direction in directions {
        let mut moving = sliders;
        let mut steps = 0i32;

        while moving != 0 {
            moving = direction.shift(moving);
            let mut captures = moving & enemies;
            moving &= empty;
            steps += 1;

            let mut quiet = moving;
            while quiet != 0 {
                let to = pop_lsb(&mut quiet);
                let from = (to as i32 - direction.offset() * steps) as Square;
                out.push(encode_move(from, to, MoveKind::Normal));
            }

            while captures != 0 {
                let to = pop_lsb(&mut captures);
                let from = (to as i32 - direction.offset() * steps) as Square;
                out.push(encode_move(from, to, MoveKind::Normal));
            }
        }
    }
}
