//! Pseudo-legal knight move generation: each of the eight jumps is two
//! chained directional shifts of the whole knight set, so edge wrap is
//! impossible by construction.

use crate::board::bitboard::{pop_lsb, KNIGHT_DIRECTIONS};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::move_encoding::{encode_move, Move, MoveKind};

pub fn generate_knight_moves(position: &Position, us: Color, out: &mut Vec<Move>) {
    let knights = position.pieces(us, PieceKind::Knight);
    let enemies = position.pieces_of_color(us.opposite());
    let empty = !position.occupied();

    for (first, second) in KNIGHT_DIRECTIONS {
        let jumps = second.shift(first.shift(knights));
        let offset = first.offset() + second.offset();

        let mut quiet = jumps & empty;
        while quiet != 0 {
            let to = pop_lsb(&mut quiet);
            let from = (to as i32 - offset) as Square;
            out.push(encode_move(from, to, MoveKind::Normal));
        }

        let mut captures = jumps & enemies;
        while captures != 0 {
            let to = pop_lsb(&mut captures);
            let from = (to as i32 - offset) as Square;
            out.push(encode_move(from, to, MoveKind::Normal));
        }
    }
}
