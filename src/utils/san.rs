//! Standard algebraic notation for output and long-algebraic coordinate
//! input, the human-facing faces of the opaque move encoding.
//!
//! Formatting disambiguates with the position's attacker queries (Nbd2,
//! R4e5) and appends `x`, `e.p.`, `=Q`, and the check/mate suffixes.
//! Input like `e2e4` or `a7a8n` is matched against the legal move list;
//! an unadorned promotion defaults to queening.

use crate::board::bitboard::{file_bb, rank_bb, without_square};
use crate::game_state::chess_types::{file_of, rank_of, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::generator::legal_moves;
use crate::moves::move_encoding::{
    move_from, move_kind, move_promotion, move_to, Move, MoveKind,
};
use crate::utils::algebraic::{
    algebraic_to_square, file_to_char, rank_to_char, square_to_algebraic,
};

/// Render a move in standard algebraic notation. The position must be the
/// one the move is about to be played in.
pub fn move_to_san(position: &Position, mv: Move) -> String {
    let kind = move_kind(mv);
    let from = move_from(mv);
    let to = move_to(mv);

    let Some(moved) = position.piece_at(from) else {
        return "--".to_owned();
    };
    let capture = position.is_capture(mv);

    let mut san = String::new();

    if kind == MoveKind::Castling {
        san.push_str(if to > from { "O-O" } else { "O-O-O" });
    } else if moved.kind == PieceKind::Pawn {
        if capture {
            san.push(file_to_char(file_of(from)));
            san.push('x');
        }
        san.push_str(&square_to_algebraic(to));
        if kind == MoveKind::EnPassant {
            san.push_str("e.p.");
        } else if kind == MoveKind::Promotion {
            san.push('=');
            san.push(move_promotion(mv).san_letter());
        }
    } else {
        san.push(moved.kind.san_letter());

        // Other pieces of the same kind and color that also reach the
        // destination force a file or rank qualifier.
        let others = without_square(
            position.attackers_to_by_kind(to, moved.color, moved.kind),
            from,
        );
        if others != 0 {
            if others & file_bb(file_of(from)) != 0 {
                if others & rank_bb(rank_of(from)) != 0 {
                    san.push(file_to_char(file_of(from)));
                }
                san.push(rank_to_char(rank_of(from)));
            } else {
                san.push(file_to_char(file_of(from)));
            }
        }

        if capture {
            san.push('x');
        }
        san.push_str(&square_to_algebraic(to));
    }

    if position.is_move_checkmate(mv) {
        san.push('#');
    } else if position.is_move_check(mv) {
        san.push('+');
    }

    san
}

/// Match coordinate input ("e2e4", "a7a8n") against the legal moves of the
/// position. Promotions without a piece letter default to a queen.
pub fn move_from_long_algebraic(position: &Position, input: &str) -> Option<Move> {
    let text = input.trim().to_ascii_lowercase();
    if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
        return None;
    }

    let from = algebraic_to_square(&text[0..2]).ok()?;
    let to = algebraic_to_square(&text[2..4]).ok()?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'n') => Some(PieceKind::Knight),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'q') => Some(PieceKind::Queen),
        Some(_) => return None,
    };

    for mv in legal_moves(position) {
        if move_from(mv) != from || move_to(mv) != to {
            continue;
        }
        if move_kind(mv) == MoveKind::Promotion {
            match promotion {
                Some(piece) if move_promotion(mv) == piece => return Some(mv),
                None if move_promotion(mv) == PieceKind::Queen => return Some(mv),
                _ => continue,
            }
        }
        return Some(mv);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CastlingSide, Color};
    use crate::moves::move_encoding::{castling_move, encode_move, encode_promotion};

    #[test]
    fn quiet_piece_and_pawn_moves_format_plainly() {
        let position = Position::new_game();
        let pawn_push = encode_move(12, 28, MoveKind::Normal);
        let knight_jump = encode_move(6, 21, MoveKind::Normal);
        assert_eq!(move_to_san(&position, pawn_push), "e4");
        assert_eq!(move_to_san(&position, knight_jump), "Nf3");
    }

    #[test]
    fn twin_knights_get_a_file_qualifier() {
        let position =
            Position::from_fen("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1").expect("FEN should parse");
        let mv = encode_move(1, 11, MoveKind::Normal);
        assert_eq!(move_to_san(&position, mv), "Nbd2");
    }

    #[test]
    fn doubled_rooks_on_a_file_get_a_rank_qualifier() {
        let position =
            Position::from_fen("4k3/8/8/8/R7/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let mv = encode_move(24, 16, MoveKind::Normal);
        assert_eq!(move_to_san(&position, mv), "R4a3");
    }

    #[test]
    fn captures_promotions_and_castling_are_marked() {
        let capture_position =
            Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let pawn_takes = encode_move(28, 35, MoveKind::Normal);
        assert_eq!(move_to_san(&capture_position, pawn_takes), "exd5");

        let promo_position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let promote = encode_promotion(48, 56, PieceKind::Queen);
        assert_eq!(move_to_san(&promo_position, promote), "a8=Q+");

        let castle_position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("FEN should parse");
        let castle = castling_move(Color::Light, CastlingSide::KingSide);
        assert_eq!(move_to_san(&castle_position, castle), "O-O");
    }

    #[test]
    fn mate_gets_the_hash_suffix() {
        let position =
            Position::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").expect("FEN should parse");
        let mv = encode_move(7, 63, MoveKind::Normal);
        assert_eq!(move_to_san(&position, mv), "Rh8#");
    }

    #[test]
    fn coordinate_input_matches_legal_moves_only() {
        let position = Position::new_game();
        let parsed =
            move_from_long_algebraic(&position, "e2e4").expect("e2e4 should be legal");
        assert_eq!(move_from(parsed), 12);
        assert_eq!(move_to(parsed), 28);

        assert!(move_from_long_algebraic(&position, "e2e5").is_none());
        assert!(move_from_long_algebraic(&position, "e3e4").is_none());
        assert!(move_from_long_algebraic(&position, "xyzzy").is_none());
    }

    #[test]
    fn promotion_input_defaults_to_a_queen() {
        let position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");

        let defaulted =
            move_from_long_algebraic(&position, "a7a8").expect("bare promotion should parse");
        assert_eq!(move_promotion(defaulted), PieceKind::Queen);

        let underpromotion =
            move_from_long_algebraic(&position, "a7a8n").expect("knight promotion should parse");
        assert_eq!(move_promotion(underpromotion), PieceKind::Knight);
    }
}
