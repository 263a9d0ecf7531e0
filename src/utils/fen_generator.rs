//! Position-to-FEN generator, the inverse of the parser.

use crate::game_state::chess_types::{
    square_at, Color, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let mut fen = String::with_capacity(96);

    for rank in (0..8u8).rev() {
        let mut empty_run = 0;
        for file in 0..8u8 {
            match position.piece_at(square_at(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    fen.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match position.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    fen.push(' ');
    if position.castling_rights == 0 {
        fen.push('-');
    } else {
        if position.castling_rights & CASTLE_LIGHT_KINGSIDE != 0 {
            fen.push('K');
        }
        if position.castling_rights & CASTLE_LIGHT_QUEENSIDE != 0 {
            fen.push('Q');
        }
        if position.castling_rights & CASTLE_DARK_KINGSIDE != 0 {
            fen.push('k');
        }
        if position.castling_rights & CASTLE_DARK_QUEENSIDE != 0 {
            fen.push('q');
        }
    }

    fen.push(' ');
    match position.en_passant_square {
        Some(square) => fen.push_str(&square_to_algebraic(square)),
        None => fen.push('-'),
    }

    fen.push_str(&format!(
        " {} {}",
        position.halfmove_clock, position.fullmove_number
    ));

    fen
}
