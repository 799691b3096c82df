//! Core value types shared by every layer of the referee.

use std::fmt;

use crate::game_state::chess_rules::{
    BLACK_BACK_RANK, BLACK_PAWN_START_RANK, WHITE_BACK_RANK, WHITE_PAWN_START_RANK,
};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => WHITE_BACK_RANK,
            Color::Black => BLACK_BACK_RANK,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => WHITE_PAWN_START_RANK,
            Color::Black => BLACK_PAWN_START_RANK,
        }
    }

    /// The far rank, where pawns of this color promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().back_rank()
    }

    #[inline]
    pub const fn king(self) -> Piece {
        Piece::new(self, PieceKind::King)
    }

    #[inline]
    pub const fn queen(self) -> Piece {
        Piece::new(self, PieceKind::Queen)
    }

    #[inline]
    pub const fn rook(self) -> Piece {
        Piece::new(self, PieceKind::Rook)
    }

    #[inline]
    pub const fn bishop(self) -> Piece {
        Piece::new(self, PieceKind::Bishop)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Upper-case letter used by the debug board display.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A colored piece. Pieces carry no per-instance state and compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Board letter: upper case for White, lower case for Black.
    #[inline]
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

/// Overall game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Draw,
    WhiteWins,
    BlackWins,
}

impl Outcome {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}
