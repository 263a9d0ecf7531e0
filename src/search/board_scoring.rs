//! Static position scoring in centipawns, from Light's point of view.
//!
//! Terminal states dominate everything: draws are exactly zero and a
//! checkmated side scores at the mate magnitude, shrunk by the number of
//! full moves it took to get there so that shallower mates read as more
//! extreme. Ordinary positions combine material, a bishop-pair bonus,
//! pawn and knight piece-square tables, a gated king-safety table, and a
//! mobility term.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::generator::legal_moves_for;

/// Magnitude of a checkmate on the board (before mate-distance shrinking).
pub const MATE_SCORE: i32 = 100_000;

/// Scores at or beyond this magnitude are treated as proven forced mates.
pub const MATE_THRESHOLD: i32 = 90_000;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 310;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

/// Bonus for holding bishops on both square colors.
pub const BISHOP_PAIR_BONUS: i32 = 50;

/// Centipawns per legal move.
const MOBILITY_WEIGHT: i32 = 1;

/// The king-safety table only applies while the enemy still fields at
/// least this much non-pawn material (roughly a rook and a minor piece);
/// past that the king should centralize instead of hiding.
const KING_SAFETY_MATERIAL_THRESHOLD: i32 = 1200;

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
    0,  0,  0,  0,  0,  0,  0,  0,
    0,  0,  0,  0,  0,  0,  0,  0,
    4,  8,  4,  5,  5,  4,  8,  4,
    4,  7,  8, 10, 10,  8,  7,  4,
   12, 15, 18, 20, 20, 18, 15, 12,
   18, 20, 26, 30, 30, 26, 20, 18,
   22, 24, 28, 36, 36, 28, 24, 22,
    0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
  -35, -30, -20, -20, -20, -20, -30, -35,
  -30, -15, -10, -10, -10, -10, -15, -30,
  -20, -10,   0,   0,   0,   0, -10, -20,
  -20, -10,   0,   0,   0,   0, -10, -20,
  -20, -10,   0,   0,   0,   0, -10, -20,
  -20, -10,   0,   0,   0,   0, -10, -20,
  -30, -15, -10, -10, -10, -10, -15, -30,
  -35, -30, -20, -20, -20, -20, -30, -35,
];

#[rustfmt::skip]
const KING_SAFETY_TABLE: [i32; 64] = [
    0,   0, -10, -20, -20, -10,   0,   0,
    0,  -5, -12, -25, -25, -12,  -5,   0,
   -8, -18, -30, -40, -40, -30, -18,  -8,
  -10, -30, -40, -60, -60, -40, -30, -10,
  -10, -30, -40, -60, -60, -40, -30, -10,
   -8, -18, -30, -40, -40, -30, -18,  -8,
    0,  -5, -12, -25, -25, -12,  -5,   0,
    0,   0, -10, -20, -20, -10,   0,   0,
];

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => 0,
    }
}

/// Tables are written from Light's perspective; Dark indices are reflected
/// through the board.
#[inline]
const fn table_index(color: Color, square: Square) -> usize {
    match color {
        Color::Light => square as usize,
        Color::Dark => 63 - square as usize,
    }
}

/// Static score of the position, Light minus Dark, in centipawns.
pub fn evaluate(position: &Position) -> i32 {
    evaluate_at(position, 0)
}

/// Static score with mate-distance awareness: `depth_from_root` tells a
/// checkmate how far from the search root it was found.
pub fn evaluate_at(position: &Position, depth_from_root: u32) -> i32 {
    if position.is_draw() {
        return 0;
    }

    if position.is_checkmate() {
        let full_moves_to_mate = (depth_from_root as i32 + 1) / 2;
        let magnitude = MATE_SCORE - full_moves_to_mate;
        return match position.side_to_move {
            Color::Light => -magnitude,
            Color::Dark => magnitude,
        };
    }

    side_score(position, Color::Light) - side_score(position, Color::Dark)
}

/// One side's share of the evaluation.
pub fn side_score(position: &Position, color: Color) -> i32 {
    let mut score = material(position, color);

    if has_bishop_pair(position, color) {
        score += BISHOP_PAIR_BONUS;
    }

    for &square in position.piece_squares(color, PieceKind::Pawn) {
        score += PAWN_TABLE[table_index(color, square)];
    }
    for &square in position.piece_squares(color, PieceKind::Knight) {
        score += KNIGHT_TABLE[table_index(color, square)];
    }

    if non_pawn_material(position, color.opposite()) >= KING_SAFETY_MATERIAL_THRESHOLD {
        if let Some(king) = position.king_square(color) {
            score += KING_SAFETY_TABLE[table_index(color, king)];
        }
    }

    score += MOBILITY_WEIGHT * legal_moves_for(position, color).len() as i32;

    score
}

fn material(position: &Position, color: Color) -> i32 {
    let mut total = 0;
    for kind in [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ] {
        total += position.piece_count(color, kind) as i32 * piece_value(kind);
    }
    total
}

fn non_pawn_material(position: &Position, color: Color) -> i32 {
    material(position, color) - position.piece_count(color, PieceKind::Pawn) as i32 * PAWN_VALUE
}

fn has_bishop_pair(position: &Position, color: Color) -> bool {
    use crate::board::bitboard::{DARK_SQUARES_BB, LIGHT_SQUARES_BB};
    let bishops = position.pieces(color, PieceKind::Bishop);
    bishops & LIGHT_SQUARES_BB != 0 && bishops & DARK_SQUARES_BB != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_kings_evaluate_to_zero() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate(&position), 0);
    }

    #[test]
    fn an_extra_pawn_is_worth_at_least_its_material() {
        let bare = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let with_pawn =
            Position::from_fen("4k3/8/8/8/8/8/P7/4K3 w - - 0 1").expect("FEN should parse");
        assert!(evaluate(&with_pawn) - evaluate(&bare) >= PAWN_VALUE);
    }

    #[test]
    fn checkmate_scores_at_the_mate_magnitude() {
        let dark_mated =
            Position::from_fen("k6R/8/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate(&dark_mated), MATE_SCORE);

        let seen_two_plies_deep = evaluate_at(&dark_mated, 2);
        assert_eq!(seen_two_plies_deep, MATE_SCORE - 1);
        assert!(seen_two_plies_deep > MATE_THRESHOLD);
    }

    #[test]
    fn mated_light_side_scores_negative() {
        let light_mated =
            Position::from_fen("K6r/8/1k6/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate(&light_mated), -MATE_SCORE);
    }

    #[test]
    fn draws_score_exactly_zero() {
        let stalemate =
            Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate(&stalemate), 0);

        let fifty_moves =
            Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 90").expect("FEN should parse");
        assert_eq!(evaluate(&fifty_moves), 0);
    }

    #[test]
    fn bishop_pair_bonus_requires_both_square_colors() {
        let pair = Position::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1")
            .expect("FEN should parse");
        let same_color_pair = Position::from_fen("4k3/8/8/8/8/8/8/1B2K1B1 w - - 0 1")
            .expect("FEN should parse");
        assert!(has_bishop_pair(&pair, Color::Light));
        assert!(!has_bishop_pair(&same_color_pair, Color::Light));
    }

    #[test]
    fn knights_prefer_the_center() {
        let rim = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let center =
            Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(evaluate(&center) > evaluate(&rim));
    }
}
