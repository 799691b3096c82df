//! The move record kept in board history.
//!
//! A `Move` is built speculatively from (piece, from, to). `Board::do_move`
//! fills in the captured piece and the special-move tag before pushing it on
//! the history, so a recorded move carries everything needed to undo it.

use std::fmt;

use crate::game_state::chess_rules::{KING_HOME_FILE, KING_SIDE_ROOK_FILE, QUEEN_SIDE_ROOK_FILE};
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;

/// Which rook a castling move brings across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    /// Toward the a-file (left from White's view).
    QueenSide,
    /// Toward the h-file (right from White's view).
    KingSide,
}

impl CastlingSide {
    /// Side implied by a two-square king step of `d_file`.
    #[inline]
    pub const fn from_king_step(d_file: i8) -> Self {
        if d_file < 0 {
            CastlingSide::QueenSide
        } else {
            CastlingSide::KingSide
        }
    }

    /// The castling side if `piece` moving `from -> to` is a castling attempt:
    /// a king on its home square stepping two files along its back rank.
    pub fn from_move(piece: Piece, from: Coordinate, to: Coordinate) -> Option<Self> {
        let home = Coordinate::new(KING_HOME_FILE, piece.color.back_rank());
        let (d_file, d_rank) = from.delta_to(to);
        if piece.kind == PieceKind::King && from == home && d_rank == 0 && d_file.abs() == 2 {
            Some(Self::from_king_step(d_file))
        } else {
            None
        }
    }

    /// Rook origin (corner) and destination (beside the king's home) on `rank`.
    pub const fn rook_squares(self, rank: i8) -> (Coordinate, Coordinate) {
        match self {
            CastlingSide::QueenSide => (
                Coordinate::new(QUEEN_SIDE_ROOK_FILE, rank),
                Coordinate::new(KING_HOME_FILE - 1, rank),
            ),
            CastlingSide::KingSide => (
                Coordinate::new(KING_SIDE_ROOK_FILE, rank),
                Coordinate::new(KING_HOME_FILE + 1, rank),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSpecialness {
    /// Plain move or capture on the destination square.
    Regular,
    /// Pawn reached the far rank and became a queen.
    Promotion,
    /// Pawn captured a double-stepped pawn standing beside it.
    EnPassant { captured_at: Coordinate },
    /// King moved two squares and the rook jumped over it.
    Castling(CastlingSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<Piece>,
    pub specialness: MoveSpecialness,
}

impl Move {
    /// A move as requested, before the board has filled in its details.
    #[inline]
    pub const fn new(piece: Piece, from: Coordinate, to: Coordinate) -> Self {
        Self {
            piece,
            from,
            to,
            captured: None,
            specialness: MoveSpecialness::Regular,
        }
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.specialness == MoveSpecialness::Promotion
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.specialness, MoveSpecialness::EnPassant { .. })
    }

    #[inline]
    pub fn castling_side(&self) -> Option<CastlingSide> {
        match self.specialness {
            MoveSpecialness::Castling(side) => Some(side),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether this is a pawn advancing two squares.
    #[inline]
    pub fn is_double_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.delta_to(self.to).1.abs() == 2
    }

    /// Long algebraic form such as `Pe2-e4`, `Pe7xd8=Q` or `Ke1-g1 (O-O)`.
    pub fn to_long_algebraic(&self) -> String {
        let separator = if self.is_capture() { 'x' } else { '-' };
        let mut out = format!("{}{}{}{}", self.piece.symbol(), self.from, separator, self.to);
        match self.specialness {
            MoveSpecialness::Regular => {}
            MoveSpecialness::Promotion => out.push_str("=Q"),
            MoveSpecialness::EnPassant { .. } => out.push_str(" e.p."),
            MoveSpecialness::Castling(CastlingSide::KingSide) => out.push_str(" (O-O)"),
            MoveSpecialness::Castling(CastlingSide::QueenSide) => out.push_str(" (O-O-O)"),
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}
