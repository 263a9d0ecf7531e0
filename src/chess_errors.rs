//! Errors used throughout the engine core.
//!
//! The position model signals programmer-contract violations (moving from an
//! empty cell, placing onto an occupied one, removing from an empty one) as
//! values of this enum rather than panicking. Correctly generated moves never
//! trip them; callers applying arbitrary moves propagate them with `?`.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessErrors {
    /// `add_piece` was asked to place a piece on an occupied cell.
    SquareOccupied(Square),

    /// `move_piece` or a move application read an empty origin cell.
    MoveFromEmptySquare(Square),

    /// `move_piece` was asked to relocate onto an occupied cell. Captures
    /// remove the victim first, so this only fires on malformed moves.
    MoveToOccupiedSquare(Square),

    /// `remove_piece` was asked to clear an already-empty cell.
    RemoveFromEmptySquare(Square),

    /// The per-color/per-kind occupancy list is at capacity.
    PieceListFull(Color, PieceKind),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::SquareOccupied(square) => {
                write!(f, "square {square} is already occupied")
            }
            ChessErrors::MoveFromEmptySquare(square) => {
                write!(f, "no piece on origin square {square}")
            }
            ChessErrors::MoveToOccupiedSquare(square) => {
                write!(f, "destination square {square} is occupied")
            }
            ChessErrors::RemoveFromEmptySquare(square) => {
                write!(f, "no piece to remove on square {square}")
            }
            ChessErrors::PieceListFull(color, kind) => {
                write!(f, "piece list full for {color:?} {kind:?}")
            }
        }
    }
}

impl Error for ChessErrors {}
