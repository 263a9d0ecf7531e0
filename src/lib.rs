//! Crate root module declarations for the Damson Chess engine.
//!
//! This file exposes all top-level subsystems (bitboard primitives, game
//! state, move generation, search, engines, and notation utilities) so the
//! CLI binary, tests, and benches can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod bitboard;
}

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod move_encoding;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod generator;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod perft;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod tree_search;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_position;
    pub mod san;
}
