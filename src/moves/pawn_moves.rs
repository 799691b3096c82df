//! Pawn move shape.
//!
//! Pawns step one square forward, two from their starting rank, or one square
//! diagonally forward. The diagonal is a valid shape even though playing it
//! also needs a capture target (or an en-passant victim), which the legality
//! filter checks.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::moves::move_shapes::{invalid_shape, is_distinct_on_board};
use crate::moves::queen_moves;

#[inline]
pub fn is_shape_valid(color: Color, from: Coordinate, to: Coordinate) -> bool {
    if !is_distinct_on_board(from, to) {
        return false;
    }
    let forward = color.forward();
    match from.delta_to(to) {
        (0, d_rank) if d_rank == forward => true,
        (0, d_rank) if d_rank == 2 * forward => from.rank() == color.pawn_start_rank(),
        (d_file, d_rank) => d_file.abs() == 1 && d_rank == forward,
    }
}

/// Every valid pawn displacement is also a queen displacement.
pub fn path(color: Color, from: Coordinate, to: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    if !is_shape_valid(color, from, to) {
        return Err(invalid_shape(PieceKind::Pawn, from, to));
    }
    queen_moves::path(from, to)
}

/// Whether the displacement is one of the two diagonal (capturing) steps.
#[inline]
pub fn is_diagonal_step(from: Coordinate, to: Coordinate) -> bool {
    from.file() != to.file()
}
