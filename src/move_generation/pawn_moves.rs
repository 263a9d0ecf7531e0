//! Pseudo-legal pawn move generation.
//!
//! The whole pawn set is shifted at once per direction; origins are
//! recovered by stepping each destination back. Pawns one rank short of
//! promotion are handled separately so every push or capture onto the last
//! rank fans out into the four promotion moves.

use crate::board::bitboard::{pop_lsb, rank_bb, square_bb, Bitboard, Direction};
use crate::game_state::chess_types::{Color, PieceKind, Square, PROMOTION_KINDS};
use crate::game_state::position::Position;
use crate::moves::move_encoding::{encode_move, encode_promotion, Move, MoveKind};

pub fn generate_pawn_moves(position: &Position, us: Color, out: &mut Vec<Move>) {
    let pawns = position.pieces(us, PieceKind::Pawn);
    let enemies = position.pieces_of_color(us.opposite());
    let empty = !position.occupied();

    let forward = us.forward();
    let (forward_left, forward_right) = match us {
        Color::Light => (Direction::NorthWest, Direction::NorthEast),
        Color::Dark => (Direction::SouthEast, Direction::SouthWest),
    };
    // Relative seventh rank (one step from promotion) and third rank (the
    // cell a single push crosses on the way to a double push).
    let (promotion_from_rank, third_rank) = match us {
        Color::Light => (rank_bb(6), rank_bb(2)),
        Color::Dark => (rank_bb(1), rank_bb(5)),
    };

    let pawns_below_promotion = pawns & !promotion_from_rank;
    let pawns_on_promotion_rank = pawns & promotion_from_rank;

    let mut single_pushes = forward.shift(pawns_below_promotion) & empty;
    let mut double_pushes = forward.shift(single_pushes & third_rank) & empty;

    while single_pushes != 0 {
        let to = pop_lsb(&mut single_pushes);
        let from = (to as i32 - forward.offset()) as Square;
        out.push(encode_move(from, to, MoveKind::Normal));
    }

    while double_pushes != 0 {
        let to = pop_lsb(&mut double_pushes);
        let from = (to as i32 - 2 * forward.offset()) as Square;
        out.push(encode_move(from, to, MoveKind::Normal));
    }

    push_captures(pawns_below_promotion, forward_left, enemies, out);
    push_captures(pawns_below_promotion, forward_right, enemies, out);

    if let Some(target_square) = position.en_passant_square {
        let target = square_bb(target_square);
        push_en_passant(pawns_below_promotion, forward_left, target, out);
        push_en_passant(pawns_below_promotion, forward_right, target, out);
    }

    let mut promotion_pushes = forward.shift(pawns_on_promotion_rank) & empty;
    while promotion_pushes != 0 {
        let to = pop_lsb(&mut promotion_pushes);
        let from = (to as i32 - forward.offset()) as Square;
        push_promotions(from, to, out);
    }

    push_promotion_captures(pawns_on_promotion_rank, forward_left, enemies, out);
    push_promotion_captures(pawns_on_promotion_rank, forward_right, enemies, out);
}

fn push_captures(pawns: Bitboard, direction: Direction, enemies: Bitboard, out: &mut Vec<Move>) {
    let mut captures = direction.shift(pawns) & enemies;
    while captures != 0 {
        let to = pop_lsb(&mut captures);
        let from = (to as i32 - direction.offset()) as Square;
        out.push(encode_move(from, to, MoveKind::Normal));
    }
}

fn push_en_passant(pawns: Bitboard, direction: Direction, target: Bitboard, out: &mut Vec<Move>) {
    let mut captures = direction.shift(pawns) & target;
    while captures != 0 {
        let to = pop_lsb(&mut captures);
        let from = (to as i32 - direction.offset()) as Square;
        out.push(encode_move(from, to, MoveKind::EnPassant));
    }
}

fn push_promotion_captures(
    pawns: Bitboard,
    direction: Direction,
    enemies: Bitboard,
    out: &mut Vec<Move>,
) {
    let mut captures = direction.shift(pawns) & enemies;
    while captures != 0 {
        let to = pop_lsb(&mut captures);
        let from = (to as i32 - direction.offset()) as Square;
        push_promotions(from, to, out);
    }
}

#[inline]
fn push_promotions(from: Square, to: Square, out: &mut Vec<Move>) {
    for promotion in PROMOTION_KINDS {
        out.push(encode_promotion(from, to, promotion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_encoding::{move_kind, move_to};

    #[test]
    fn starting_pawns_have_sixteen_moves() {
        let position = Position::new_game();
        let mut moves = Vec::new();
        generate_pawn_moves(&position, Color::Light, &mut moves);
        assert_eq!(moves.len(), 16);
    }

    #[test]
    fn double_push_requires_both_cells_empty() {
        // A dark piece on e3 blocks e2-e4 and e2-e3 alike.
        let position =
            Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&position, Color::Light, &mut moves);
        assert!(moves.iter().all(|&mv| move_to(mv) != 20 && move_to(mv) != 28));
    }

    #[test]
    fn promotion_push_fans_out_into_four_moves() {
        let position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&position, Color::Light, &mut moves);
        let promotions: Vec<_> = moves
            .iter()
            .filter(|&&mv| move_kind(mv) == MoveKind::Promotion)
            .collect();
        assert_eq!(promotions.len(), 4);
    }

    #[test]
    fn en_passant_is_generated_onto_the_recorded_target() {
        let position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&position, Color::Light, &mut moves);
        assert!(moves
            .iter()
            .any(|&mv| move_kind(mv) == MoveKind::EnPassant && move_to(mv) == 43));
    }

    #[test]
    fn dark_pawns_move_toward_the_first_rank() {
        let position = Position::new_game();
        let mut moves = Vec::new();
        generate_pawn_moves(&position, Color::Dark, &mut moves);
        assert_eq!(moves.len(), 16);
        assert!(moves.iter().all(|&mv| move_to(mv) < 48));
    }
}
