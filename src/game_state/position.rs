//! The mutable position aggregate and its make/unmake move semantics.
//!
//! A `Position` keeps four redundant views of the same placement — per-kind
//! bitboards, per-color bitboards, a dense cell lookup, and per-color/kind
//! occupancy lists — which must agree after every mutation. All placement
//! changes flow through the three primitives `add_piece`, `move_piece`, and
//! `remove_piece`; `do_move` applies a move permanently while the
//! `temp_do_move` / `undo_temp_move` pair probes legality without touching
//! castling rights, the en-passant target, or the clocks.

use crate::board::bitboard::{
    square_bb, Bitboard, Direction, BISHOP_DIRECTIONS, EMPTY_BB, KING_DIRECTIONS,
    KNIGHT_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    FIFTY_MOVE_RULE_HALFMOVES, PIECE_LIST_CAPACITY, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    castling_right, file_of, rank_of, square_at, CastlingRights, CastlingSide, Color,
    ColoredPiece, PieceKind, Square, ALL_PIECE_KINDS, TOTAL_SQUARES,
};
use crate::move_generation::generator::{legal_moves, legal_moves_for};
use crate::moves::move_encoding::{move_from, move_kind, move_promotion, move_to, Move, MoveKind};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct Position {
    // --- Placement, four views kept in lock-step ---
    pub kind_bb: [Bitboard; 6],
    pub color_bb: [Bitboard; 2],
    pub board: [Option<ColoredPiece>; TOTAL_SQUARES],
    pub piece_count: [[u8; 6]; 2],
    pub piece_list: [[[Square; PIECE_LIST_CAPACITY]; 6]; 2],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            kind_bb: [EMPTY_BB; 6],
            color_bb: [EMPTY_BB; 2],
            board: [None; TOTAL_SQUARES],
            piece_count: [[0; 6]; 2],
            piece_list: [[[0; PIECE_LIST_CAPACITY]; 6]; 2],

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Placement queries -------------------------------------------------

    /// All occupied cells.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.color_bb[Color::Light.index()] | self.color_bb[Color::Dark.index()]
    }

    #[inline]
    pub fn pieces_of_color(&self, color: Color) -> Bitboard {
        self.color_bb[color.index()]
    }

    #[inline]
    pub fn pieces_of_kind(&self, kind: PieceKind) -> Bitboard {
        self.kind_bb[kind.index()]
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.kind_bb[kind.index()] & self.color_bb[color.index()]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.board[square as usize].is_none()
    }

    #[inline]
    pub fn piece_count(&self, color: Color, kind: PieceKind) -> usize {
        self.piece_count[color.index()][kind.index()] as usize
    }

    /// The occupied cells for one color/kind, in stable insertion order.
    #[inline]
    pub fn piece_squares(&self, color: Color, kind: PieceKind) -> &[Square] {
        let count = self.piece_count(color, kind);
        &self.piece_list[color.index()][kind.index()][..count]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.piece_squares(color, PieceKind::King).first().copied()
    }

    // --- Mutation primitives -----------------------------------------------

    /// Place a piece on an empty cell, updating all four placement views.
    pub fn add_piece(
        &mut self,
        color: Color,
        kind: PieceKind,
        square: Square,
    ) -> Result<(), ChessErrors> {
        if self.board[square as usize].is_some() {
            return Err(ChessErrors::SquareOccupied(square));
        }
        let count = self.piece_count(color, kind);
        if count >= PIECE_LIST_CAPACITY {
            return Err(ChessErrors::PieceListFull(color, kind));
        }

        self.kind_bb[kind.index()] |= square_bb(square);
        self.color_bb[color.index()] |= square_bb(square);
        self.piece_list[color.index()][kind.index()][count] = square;
        self.piece_count[color.index()][kind.index()] += 1;
        self.board[square as usize] = Some(ColoredPiece { color, kind });
        Ok(())
    }

    /// Relocate the piece on `from` to the empty cell `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        let piece = self
            .piece_at(from)
            .ok_or(ChessErrors::MoveFromEmptySquare(from))?;
        if self.board[to as usize].is_some() {
            return Err(ChessErrors::MoveToOccupiedSquare(to));
        }

        let color = piece.color.index();
        let kind = piece.kind.index();

        self.kind_bb[kind] = (self.kind_bb[kind] & !square_bb(from)) | square_bb(to);
        self.color_bb[color] = (self.color_bb[color] & !square_bb(from)) | square_bb(to);

        let count = self.piece_count[color][kind] as usize;
        for entry in self.piece_list[color][kind][..count].iter_mut() {
            if *entry == from {
                *entry = to;
            }
        }

        self.board[from as usize] = None;
        self.board[to as usize] = Some(piece);
        Ok(())
    }

    /// Clear an occupied cell, compacting the occupancy list by shifting the
    /// trailing entries left (order of the remainder is preserved).
    pub fn remove_piece(&mut self, square: Square) -> Result<ColoredPiece, ChessErrors> {
        let piece = self
            .piece_at(square)
            .ok_or(ChessErrors::RemoveFromEmptySquare(square))?;

        let color = piece.color.index();
        let kind = piece.kind.index();

        self.kind_bb[kind] &= !square_bb(square);
        self.color_bb[color] &= !square_bb(square);

        let count = self.piece_count[color][kind] as usize;
        if let Some(slot) = self.piece_list[color][kind][..count]
            .iter()
            .position(|&entry| entry == square)
        {
            self.piece_list[color][kind].copy_within(slot + 1..count, slot);
        }
        self.piece_count[color][kind] -= 1;

        self.board[square as usize] = None;
        Ok(piece)
    }

    // --- Castling rights ---------------------------------------------------

    #[inline]
    pub fn has_right(&self, color: Color, side: CastlingSide) -> bool {
        self.castling_rights & castling_right(color, side) != 0
    }

    #[inline]
    pub fn give_right(&mut self, color: Color, side: CastlingSide) {
        self.castling_rights |= castling_right(color, side);
    }

    #[inline]
    fn remove_right(&mut self, color: Color, side: CastlingSide) {
        self.castling_rights &= !castling_right(color, side);
    }

    #[inline]
    fn remove_rights(&mut self, color: Color) {
        self.remove_right(color, CastlingSide::KingSide);
        self.remove_right(color, CastlingSide::QueenSide);
    }

    /// The right is held, the path between king and rook is clear, and none
    /// of the three cells the king occupies or crosses is attacked.
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        self.has_right(color, side)
            && self.castling_not_blocked(color, side)
            && self.castling_not_attacked(color, side)
    }

    fn castling_not_blocked(&self, color: Color, side: CastlingSide) -> bool {
        let king = square_at(4, color.home_rank());
        let step = side.direction().offset();
        let distance = match side {
            CastlingSide::KingSide => 3,
            CastlingSide::QueenSide => 4,
        };
        (1..distance).all(|i| self.is_empty_square((king as i32 + step * i) as Square))
    }

    fn castling_not_attacked(&self, color: Color, side: CastlingSide) -> bool {
        let king = square_at(4, color.home_rank());
        let step = side.direction().offset();
        // Start, transit, and destination cell of the king. The queen-side
        // b-file cell only has to be empty, not unattacked.
        (0..3).all(|i| {
            self.attackers_to_by((king as i32 + step * i) as Square, color.opposite()) == EMPTY_BB
        })
    }

    // --- Move application --------------------------------------------------

    /// True if the move lands on an enemy piece or captures en passant.
    #[inline]
    pub fn is_capture(&self, mv: Move) -> bool {
        move_kind(mv) == MoveKind::EnPassant || self.piece_at(move_to(mv)).is_some()
    }

    /// Cell holding the captured piece: the destination, except en passant
    /// where the victim sits one rank behind it from the mover's viewpoint.
    #[inline]
    fn capture_square(mv: Move, mover: Color) -> Square {
        let to = move_to(mv);
        if move_kind(mv) == MoveKind::EnPassant {
            (to as i32 - mover.forward().offset()) as Square
        } else {
            to
        }
    }

    fn castling_rook_squares(from: Square, to: Square, mover: Color) -> (Square, Square) {
        let rank = mover.home_rank();
        if to > from {
            (square_at(7, rank), square_at(5, rank))
        } else {
            (square_at(0, rank), square_at(3, rank))
        }
    }

    /// Apply a move permanently: rights, en-passant target, clocks, and the
    /// side to move are all maintained.
    pub fn do_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        let from = move_from(mv);
        let to = move_to(mv);
        let kind = move_kind(mv);

        let moved = self
            .piece_at(from)
            .ok_or(ChessErrors::MoveFromEmptySquare(from))?;
        let us = moved.color;

        let capture = self.is_capture(mv);

        // Zeroed again below on captures and pawn moves.
        self.halfmove_clock += 1;
        self.en_passant_square = None;

        if kind == MoveKind::Promotion {
            // Swap the pawn for the promoted piece in place; it is relocated
            // together with every other move at the end.
            self.remove_piece(from)?;
            self.add_piece(us, move_promotion(mv), from)?;
        }

        if moved.kind == PieceKind::King {
            self.remove_rights(us);
        }

        if moved.kind == PieceKind::Rook && rank_of(from) == us.home_rank() {
            // Any rook leaving a home corner forfeits that wing's right.
            if file_of(from) == 0 {
                self.remove_right(us, CastlingSide::QueenSide);
            }
            if file_of(from) == 7 {
                self.remove_right(us, CastlingSide::KingSide);
            }
        }

        if capture {
            self.remove_piece(Self::capture_square(mv, us))?;
            self.halfmove_clock = 0;
        }

        if moved.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
            let forward = us.forward().offset();
            if to as i32 == from as i32 + 2 * forward {
                self.en_passant_square = Some((from as i32 + forward) as Square);
            }
        }

        if kind == MoveKind::Castling {
            let (rook_from, rook_to) = Self::castling_rook_squares(from, to, us);
            self.move_piece(rook_from, rook_to)?;
            self.remove_rights(us);
        }

        self.move_piece(from, to)?;

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::Light {
            self.fullmove_number += 1;
        }
        Ok(())
    }

    /// Apply only the placement changes of a move, for legality probing.
    ///
    /// Rights, the en-passant target, and the clocks are untouched and the
    /// side to move is not flipped. Returns the kind of the captured piece,
    /// which the caller must hand back to [`Position::undo_temp_move`]; since
    /// the capture travels through the return value instead of shared state,
    /// temporary moves nest safely.
    pub fn temp_do_move(&mut self, mv: Move) -> Result<Option<PieceKind>, ChessErrors> {
        let from = move_from(mv);
        let to = move_to(mv);
        let kind = move_kind(mv);

        let moved = self
            .piece_at(from)
            .ok_or(ChessErrors::MoveFromEmptySquare(from))?;
        let us = moved.color;

        if kind == MoveKind::Promotion {
            self.remove_piece(from)?;
            self.add_piece(us, move_promotion(mv), from)?;
        }

        let captured = if kind == MoveKind::EnPassant {
            self.remove_piece(Self::capture_square(mv, us))?;
            Some(PieceKind::Pawn)
        } else if let Some(victim) = self.piece_at(to) {
            self.remove_piece(to)?;
            Some(victim.kind)
        } else {
            None
        };

        if kind == MoveKind::Castling {
            let (rook_from, rook_to) = Self::castling_rook_squares(from, to, us);
            self.move_piece(rook_from, rook_to)?;
        }

        self.move_piece(from, to)?;
        Ok(captured)
    }

    /// Exact inverse of [`Position::temp_do_move`]: relocates the mover (and
    /// castling rook) back, restores the captured piece, and reverses any
    /// promotion.
    pub fn undo_temp_move(
        &mut self,
        mv: Move,
        captured: Option<PieceKind>,
    ) -> Result<(), ChessErrors> {
        let from = move_from(mv);
        let to = move_to(mv);
        let kind = move_kind(mv);

        let moved = self
            .piece_at(to)
            .ok_or(ChessErrors::MoveFromEmptySquare(to))?;
        let us = moved.color;

        self.move_piece(to, from)?;

        if kind == MoveKind::Castling {
            let (rook_from, rook_to) = Self::castling_rook_squares(from, to, us);
            self.move_piece(rook_to, rook_from)?;
        }

        if let Some(captured_kind) = captured {
            self.add_piece(us.opposite(), captured_kind, Self::capture_square(mv, us))?;
        }

        if kind == MoveKind::Promotion {
            self.remove_piece(from)?;
            self.add_piece(us, PieceKind::Pawn, from)?;
        }
        Ok(())
    }

    // --- Legality ----------------------------------------------------------

    /// A pseudo-legal move is legal when it does not leave the mover's own
    /// king attacked. The mover is read off the origin cell rather than the
    /// side-to-move flag, since the temporary path does not flip it.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        match self.piece_at(move_from(mv)) {
            Some(moved) => self.is_legal_for(mv, moved.color),
            None => false,
        }
    }

    /// Legality probe "as if" `color` were to move.
    pub fn is_legal_for(&mut self, mv: Move, color: Color) -> bool {
        let Ok(captured) = self.temp_do_move(mv) else {
            return false;
        };
        let legal = !self.is_in_check(color);
        // A temp move that applied cleanly always reverses cleanly.
        self.undo_temp_move(mv, captured).ok();
        legal
    }

    // --- Attack queries ----------------------------------------------------

    /// Pawns of `color` attacking `square`, found by stepping the target
    /// backward along that color's capture directions.
    pub fn pawn_attackers_to(&self, square: Square, color: Color) -> Bitboard {
        let (back_left, back_right) = match color {
            Color::Light => (Direction::SouthWest, Direction::SouthEast),
            Color::Dark => (Direction::NorthEast, Direction::NorthWest),
        };
        let target = square_bb(square);
        (back_left.shift(target) | back_right.shift(target)) & self.pieces(color, PieceKind::Pawn)
    }

    pub fn knight_attackers_to(&self, square: Square) -> Bitboard {
        let target = square_bb(square);
        let mut reach = EMPTY_BB;
        for (first, second) in KNIGHT_DIRECTIONS {
            reach |= second.shift(first.shift(target));
        }
        reach & self.pieces_of_kind(PieceKind::Knight)
    }

    pub fn bishop_attackers_to(&self, square: Square) -> Bitboard {
        self.slider_attackers_to(square, &BISHOP_DIRECTIONS, PieceKind::Bishop)
    }

    pub fn rook_attackers_to(&self, square: Square) -> Bitboard {
        self.slider_attackers_to(square, &ROOK_DIRECTIONS, PieceKind::Rook)
    }

    pub fn queen_attackers_to(&self, square: Square) -> Bitboard {
        self.slider_attackers_to(square, &QUEEN_DIRECTIONS, PieceKind::Queen)
    }

    pub fn king_attackers_to(&self, square: Square) -> Bitboard {
        let target = square_bb(square);
        let mut reach = EMPTY_BB;
        for direction in KING_DIRECTIONS {
            reach |= direction.shift(target);
        }
        reach & self.pieces_of_kind(PieceKind::King)
    }

    /// Cast rays outward from the target; each ray marks cells until it hits
    /// the first occupant, so only an unobstructed `kind` slider survives
    /// the final intersection.
    fn slider_attackers_to(
        &self,
        square: Square,
        directions: &[Direction],
        kind: PieceKind,
    ) -> Bitboard {
        let occupied = self.occupied();
        let mut reach = EMPTY_BB;
        for &direction in directions {
            let mut ray = square_bb(square);
            while ray != EMPTY_BB {
                ray = direction.shift(ray);
                reach |= ray;
                ray &= !occupied;
            }
        }
        reach & self.pieces_of_kind(kind)
    }

    pub fn attackers_to_of_kind(&self, square: Square, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::Pawn => {
                self.pawn_attackers_to(square, Color::Light)
                    | self.pawn_attackers_to(square, Color::Dark)
            }
            PieceKind::Knight => self.knight_attackers_to(square),
            PieceKind::Bishop => self.bishop_attackers_to(square),
            PieceKind::Rook => self.rook_attackers_to(square),
            PieceKind::Queen => self.queen_attackers_to(square),
            PieceKind::King => self.king_attackers_to(square),
        }
    }

    /// Every piece of either color attacking `square`.
    pub fn attackers_to(&self, square: Square) -> Bitboard {
        let mut attackers = EMPTY_BB;
        for kind in ALL_PIECE_KINDS {
            attackers |= self.attackers_to_of_kind(square, kind);
        }
        attackers
    }

    #[inline]
    pub fn attackers_to_by(&self, square: Square, color: Color) -> Bitboard {
        self.attackers_to(square) & self.pieces_of_color(color)
    }

    #[inline]
    pub fn attackers_to_by_kind(&self, square: Square, color: Color, kind: PieceKind) -> Bitboard {
        self.attackers_to_of_kind(square, kind) & self.pieces_of_color(color)
    }

    // --- Game-state predicates ---------------------------------------------

    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.attackers_to_by(king, color.opposite()) != EMPTY_BB,
            None => false,
        }
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && legal_moves(self).is_empty()
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && legal_moves_for(self, color).is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && legal_moves(self).is_empty()
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && legal_moves_for(self, color).is_empty()
    }

    /// Fifty-move rule or stalemate. Three-fold repetition is a known gap:
    /// the position keeps no history, so it cannot be detected here.
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES || self.is_stalemate()
    }

    /// Would this move give check? Evaluated on a scratch copy.
    pub fn is_move_check(&self, mv: Move) -> bool {
        let mover = match self.piece_at(move_from(mv)) {
            Some(piece) => piece.color,
            None => return false,
        };
        let mut next = self.clone();
        if next.do_move(mv).is_err() {
            return false;
        }
        next.is_in_check(mover.opposite())
    }

    /// Would this move deliver checkmate? Evaluated on a scratch copy.
    pub fn is_move_checkmate(&self, mv: Move) -> bool {
        let mover = match self.piece_at(move_from(mv)) {
            Some(piece) => piece.color,
            None => return false,
        };
        let mut next = self.clone();
        if next.do_move(mv).is_err() {
            return false;
        }
        next.is_in_checkmate(mover.opposite())
    }
}

/// True when the occupied-cell sets agree across all four placement views.
#[cfg(test)]
pub(crate) fn placement_is_consistent(position: &Position) -> bool {
    use crate::board::bitboard::contains;

    let by_kind = ALL_PIECE_KINDS
        .iter()
        .fold(EMPTY_BB, |acc, &kind| acc | position.pieces_of_kind(kind));
    let by_color =
        position.pieces_of_color(Color::Light) | position.pieces_of_color(Color::Dark);

    let mut by_board = EMPTY_BB;
    for square in 0..TOTAL_SQUARES as Square {
        if let Some(piece) = position.piece_at(square) {
            by_board |= square_bb(square);
            if !contains(position.pieces(piece.color, piece.kind), square) {
                return false;
            }
        }
    }

    let lists_agree = [Color::Light, Color::Dark].iter().all(|&color| {
        ALL_PIECE_KINDS.iter().all(|&kind| {
            position
                .piece_squares(color, kind)
                .iter()
                .all(|&square| position.piece_at(square) == Some(ColoredPiece { color, kind }))
                && position.piece_squares(color, kind).len()
                    == position.pieces(color, kind).count_ones() as usize
        })
    });

    by_kind == by_color && by_color == by_board && lists_agree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bitboard::contains;
    use crate::moves::move_encoding::{castling_move, encode_move, encode_promotion};

    fn placement_snapshot(
        position: &Position,
    ) -> (
        [Bitboard; 6],
        [Bitboard; 2],
        [Option<ColoredPiece>; TOTAL_SQUARES],
        [[u8; 6]; 2],
    ) {
        (
            position.kind_bb,
            position.color_bb,
            position.board,
            position.piece_count,
        )
    }

    #[test]
    fn add_piece_rejects_occupied_cells() {
        let mut position = Position::new_empty();
        position
            .add_piece(Color::Light, PieceKind::Rook, 0)
            .expect("placing on an empty cell should succeed");
        assert_eq!(
            position.add_piece(Color::Dark, PieceKind::Queen, 0),
            Err(ChessErrors::SquareOccupied(0))
        );
        assert!(placement_is_consistent(&position));
    }

    #[test]
    fn move_piece_requires_occupied_origin_and_empty_destination() {
        let mut position = Position::new_empty();
        position
            .add_piece(Color::Light, PieceKind::Knight, 1)
            .expect("add should succeed");
        position
            .add_piece(Color::Dark, PieceKind::Pawn, 18)
            .expect("add should succeed");

        assert_eq!(
            position.move_piece(30, 40),
            Err(ChessErrors::MoveFromEmptySquare(30))
        );
        assert_eq!(
            position.move_piece(1, 18),
            Err(ChessErrors::MoveToOccupiedSquare(18))
        );
        position.move_piece(1, 11).expect("move should succeed");
        assert_eq!(
            position.piece_at(11),
            Some(ColoredPiece {
                color: Color::Light,
                kind: PieceKind::Knight
            })
        );
        assert!(placement_is_consistent(&position));
    }

    #[test]
    fn remove_piece_compacts_the_list_preserving_order() {
        let mut position = Position::new_empty();
        for square in [8, 9, 10, 11] {
            position
                .add_piece(Color::Light, PieceKind::Pawn, square)
                .expect("add should succeed");
        }
        position.remove_piece(9).expect("remove should succeed");
        assert_eq!(position.piece_squares(Color::Light, PieceKind::Pawn), &[8, 10, 11]);
        assert_eq!(
            position.remove_piece(9),
            Err(ChessErrors::RemoveFromEmptySquare(9))
        );
        assert!(placement_is_consistent(&position));
    }

    #[test]
    fn do_move_handles_the_standard_opening_push() {
        let mut position = Position::new_game();
        position
            .do_move(encode_move(12, 28, MoveKind::Normal))
            .expect("e2e4 should apply");

        assert_eq!(position.side_to_move, Color::Dark);
        assert_eq!(position.en_passant_square, Some(20));
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.fullmove_number, 1);
        assert!(placement_is_consistent(&position));

        position
            .do_move(encode_move(52, 36, MoveKind::Normal))
            .expect("e7e5 should apply");
        assert_eq!(position.en_passant_square, Some(44));
        assert_eq!(position.fullmove_number, 2);
    }

    #[test]
    fn do_move_en_passant_removes_the_passed_pawn() {
        let mut position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        position
            .do_move(encode_move(36, 43, MoveKind::EnPassant))
            .expect("exd6 e.p. should apply");

        assert!(position.is_empty_square(35), "captured pawn cell is cleared");
        assert_eq!(position.piece_count(Color::Dark, PieceKind::Pawn), 0);
        assert_eq!(position.halfmove_clock, 0);
        assert!(placement_is_consistent(&position));
    }

    #[test]
    fn do_move_castling_relocates_the_rook_and_clears_rights() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        position
            .do_move(castling_move(Color::Light, CastlingSide::KingSide))
            .expect("O-O should apply");

        assert_eq!(
            position.piece_at(6).map(|piece| piece.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            position.piece_at(5).map(|piece| piece.kind),
            Some(PieceKind::Rook)
        );
        assert!(!position.has_right(Color::Light, CastlingSide::KingSide));
        assert!(!position.has_right(Color::Light, CastlingSide::QueenSide));
        assert!(position.has_right(Color::Dark, CastlingSide::KingSide));
        assert!(placement_is_consistent(&position));
    }

    #[test]
    fn rook_leaving_home_forfeits_only_that_wing() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        position
            .do_move(encode_move(0, 8, MoveKind::Normal))
            .expect("Ra1a2 should apply");

        assert!(!position.has_right(Color::Light, CastlingSide::QueenSide));
        assert!(position.has_right(Color::Light, CastlingSide::KingSide));
    }

    #[test]
    fn promotion_replaces_the_pawn_in_place_before_relocating() {
        let mut position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        position
            .do_move(encode_promotion(48, 56, PieceKind::Queen))
            .expect("a8=Q should apply");

        assert_eq!(position.piece_count(Color::Light, PieceKind::Pawn), 0);
        assert_eq!(position.piece_count(Color::Light, PieceKind::Queen), 1);
        assert_eq!(
            position.piece_at(56),
            Some(ColoredPiece {
                color: Color::Light,
                kind: PieceKind::Queen
            })
        );
        assert!(placement_is_consistent(&position));
    }

    #[test]
    fn temp_move_round_trip_restores_placement_exactly() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");

        let mut probe = position.clone();
        for mv in crate::move_generation::generator::pseudo_legal_moves(&probe, Color::Light) {
            let before = placement_snapshot(&probe);
            let Ok(captured) = probe.temp_do_move(mv) else {
                continue;
            };
            probe
                .undo_temp_move(mv, captured)
                .expect("undo should succeed after a clean temp move");
            assert_eq!(placement_snapshot(&probe), before);
            assert!(placement_is_consistent(&probe));
        }
    }

    #[test]
    fn temp_moves_nest_because_the_capture_is_threaded_through() {
        let mut position =
            Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = placement_snapshot(&position);

        let outer = encode_move(28, 35, MoveKind::Normal);
        let outer_captured = position.temp_do_move(outer).expect("outer temp move");
        // Nested probe of a dark reply while the outer temp move is live.
        let inner = encode_move(60, 59, MoveKind::Normal);
        let inner_captured = position.temp_do_move(inner).expect("inner temp move");
        position
            .undo_temp_move(inner, inner_captured)
            .expect("inner undo");
        position
            .undo_temp_move(outer, outer_captured)
            .expect("outer undo");

        assert_eq!(placement_snapshot(&position), before);
    }

    #[test]
    fn check_and_mate_detection_on_the_back_rank() {
        let mut position =
            Position::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").expect("FEN should parse");
        position
            .do_move(encode_move(7, 63, MoveKind::Normal))
            .expect("Rh8 should apply");

        assert!(position.is_check());
        assert!(position.is_checkmate());
        assert!(position.is_in_checkmate(Color::Dark));
        assert!(legal_moves_for(&position, Color::Dark).is_empty());
    }

    #[test]
    fn stalemate_and_fifty_move_rule_are_draws() {
        let stalemate =
            Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!stalemate.is_check());
        assert!(stalemate.is_stalemate());
        assert!(stalemate.is_draw());

        let worn_out =
            Position::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 100 80").expect("FEN should parse");
        assert!(!worn_out.is_stalemate());
        assert!(worn_out.is_draw());
    }

    #[test]
    fn castling_is_rejected_while_the_transit_cell_is_attacked() {
        // A dark rook on f8 covers f1, the cell the king crosses.
        let position =
            Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!position.can_castle(Color::Light, CastlingSide::KingSide));

        // A rook on g8 covers g1, the king's destination: still rejected.
        let destination_covered =
            Position::from_fen("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!destination_covered.can_castle(Color::Light, CastlingSide::KingSide));

        let free = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(free.can_castle(Color::Light, CastlingSide::KingSide));
    }

    #[test]
    fn queen_side_castling_ignores_attacks_on_the_b_file_cell() {
        // The dark rook on b8 eyes b1, which the king never crosses.
        let position =
            Position::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(position.can_castle(Color::Light, CastlingSide::QueenSide));
    }

    #[test]
    fn slider_attacks_stop_at_the_first_occupant() {
        let position =
            Position::from_fen("4k3/8/8/8/1R2p2r/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // e4 separates the b4 rook from the h4 rook.
        let attackers = position.rook_attackers_to(28);
        assert!(contains(attackers, 25), "b4 rook reaches e4");
        assert!(contains(attackers, 31), "h4 rook reaches e4");
        let behind = position.rook_attackers_to(26);
        assert!(contains(behind, 25), "b4 rook reaches c4");
        assert!(
            !contains(behind, 31),
            "h4 rook is blocked from c4 by the e4 pawn"
        );
    }
}
