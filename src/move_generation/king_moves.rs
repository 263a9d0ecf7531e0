//! Pseudo-legal king move generation: eight single steps plus castling,
//! which is delegated entirely to the position's castling-legality check.

use crate::board::bitboard::{pop_lsb, KING_DIRECTIONS};
use crate::game_state::chess_types::{CastlingSide, Color, PieceKind};
use crate::game_state::position::Position;
use crate::moves::move_encoding::{castling_move, encode_move, Move, MoveKind};

pub fn generate_king_moves(position: &Position, us: Color, out: &mut Vec<Move>) {
    let king = position.pieces(us, PieceKind::King);
    let own = position.pieces_of_color(us);

    if let Some(from) = position.king_square(us) {
        for direction in KING_DIRECTIONS {
            let mut step = direction.shift(king) & !own;
            if step != 0 {
                out.push(encode_move(from, pop_lsb(&mut step), MoveKind::Normal));
            }
        }
    }

    if position.can_castle(us, CastlingSide::KingSide) {
        out.push(castling_move(us, CastlingSide::KingSide));
    }
    if position.can_castle(us, CastlingSide::QueenSide) {
        out.push(castling_move(us, CastlingSide::QueenSide));
    }
}
