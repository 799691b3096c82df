//! Piece-kind dispatch for move shapes and paths.
//!
//! Shape validity is the purely geometric question "can this kind of piece
//! make this displacement on an empty board?". Paths are the squares strictly
//! between origin and destination that must be empty for the move to be
//! playable. Neither looks at board occupancy.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

impl Piece {
    /// Whether `from -> to` is a geometrically valid displacement for this piece.
    ///
    /// Castling is not a shape; it is decided by the legality filter.
    pub fn is_shape_valid(&self, from: Coordinate, to: Coordinate) -> bool {
        match self.kind {
            PieceKind::Pawn => pawn_moves::is_shape_valid(self.color, from, to),
            PieceKind::Knight => knight_moves::is_shape_valid(from, to),
            PieceKind::Bishop => bishop_moves::is_shape_valid(from, to),
            PieceKind::Rook => rook_moves::is_shape_valid(from, to),
            PieceKind::Queen => queen_moves::is_shape_valid(from, to),
            PieceKind::King => king_moves::is_shape_valid(from, to),
        }
    }

    /// Squares strictly between `from` and `to`, in order of travel.
    pub fn path(&self, from: Coordinate, to: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
        match self.kind {
            PieceKind::Pawn => pawn_moves::path(self.color, from, to),
            PieceKind::Knight => knight_moves::path(from, to),
            PieceKind::Bishop => bishop_moves::path(from, to),
            PieceKind::Rook => rook_moves::path(from, to),
            PieceKind::Queen => queen_moves::path(from, to),
            PieceKind::King => king_moves::path(from, to),
        }
    }
}

/// Both endpoints on the board and distinct.
#[inline]
pub(crate) fn is_distinct_on_board(from: Coordinate, to: Coordinate) -> bool {
    from.is_on_board() && to.is_on_board() && from != to
}

/// Walk a straight or diagonal line from `from` toward `to`, exclusive of both.
///
/// Callers guarantee the displacement is a rook or bishop line.
pub(crate) fn squares_between(from: Coordinate, to: Coordinate) -> Vec<Coordinate> {
    let (d_file, d_rank) = from.delta_to(to);
    let step_file = d_file.signum();
    let step_rank = d_rank.signum();

    let mut squares = Vec::with_capacity(6);
    let mut current = from.offset(step_file, step_rank);
    while current != to {
        squares.push(current);
        current = current.offset(step_file, step_rank);
    }
    squares
}

pub(crate) fn invalid_shape(kind: PieceKind, from: Coordinate, to: Coordinate) -> ChessErrors {
    ChessErrors::InvalidShape { kind, from, to }
}
