//! ASCII board rendering for the terminal game loop.

use crate::game_state::chess_types::{square_at, Color};
use crate::game_state::position::Position;
use crate::utils::algebraic::{file_to_char, rank_to_char};

const GRID_LINE: &str = " +---+---+---+---+---+---+---+---+";

/// Render the board from Light's perspective.
pub fn render_position(position: &Position) -> String {
    render_position_for(position, Color::Light)
}

/// Render the board with the given color's pieces at the bottom.
pub fn render_position_for(position: &Position, perspective: Color) -> String {
    let (ranks, files): (Vec<u8>, Vec<u8>) = match perspective {
        Color::Light => ((0..8).rev().collect(), (0..8).collect()),
        Color::Dark => ((0..8).collect(), (0..8).rev().collect()),
    };

    let mut out = String::new();
    out.push_str(GRID_LINE);
    out.push('\n');

    for &rank in &ranks {
        out.push(rank_to_char(rank));
        out.push('|');
        for &file in &files {
            let cell = match position.piece_at(square_at(file, rank)) {
                Some(piece) => piece.fen_char(),
                None => ' ',
            };
            out.push(' ');
            out.push(cell);
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(GRID_LINE);
        out.push('\n');
    }

    out.push(' ');
    for &file in &files {
        out.push_str("   ");
        out.push(file_to_char(file).to_ascii_uppercase());
    }
    out.push('\n');

    out
}
