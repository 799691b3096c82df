//! Board coordinates.
//!
//! A `Coordinate` is a (file, rank) pair where file 0 is the a-file and rank 0
//! is the first rank. Construction and the step helpers do not bounds-check:
//! path arithmetic may pass through off-board values before being filtered, so
//! callers use [`Coordinate::is_on_board`] before indexing the board.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::{algebraic_to_coordinate, coordinate_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    file: i8,
    rank: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Square index (`a1 == 0`, `h1 == 7`, `h8 == 63`). Only meaningful on board.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + (self.file as usize)
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index % 8) as i8, (index / 8) as i8)
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self::new(self.file + d_file, self.rank + d_rank)
    }

    #[inline]
    pub const fn step_file(self, d_file: i8) -> Self {
        self.offset(d_file, 0)
    }

    #[inline]
    pub const fn step_rank(self, d_rank: i8) -> Self {
        self.offset(0, d_rank)
    }

    /// Displacement `(Δfile, Δrank)` from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Coordinate) -> (i8, i8) {
        (other.file - self.file, other.rank - self.rank)
    }

    pub fn from_notation(square: &str) -> Result<Self, ChessErrors> {
        algebraic_to_coordinate(square)
    }

    /// Algebraic name, or `None` for off-board coordinates.
    pub fn to_notation(self) -> Option<String> {
        coordinate_to_algebraic(self)
    }

    /// All 64 on-board squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_notation() {
            Some(name) => f.write_str(&name),
            None => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_notation(s)
    }
}
