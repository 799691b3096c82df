//! Rook move shape: any distance along a rank or a file.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::moves::move_shapes::{invalid_shape, is_distinct_on_board, squares_between};

#[inline]
pub fn is_shape_valid(from: Coordinate, to: Coordinate) -> bool {
    if !is_distinct_on_board(from, to) {
        return false;
    }
    let (d_file, d_rank) = from.delta_to(to);
    (d_file == 0) != (d_rank == 0)
}

pub fn path(from: Coordinate, to: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    if !is_shape_valid(from, to) {
        return Err(invalid_shape(PieceKind::Rook, from, to));
    }
    Ok(squares_between(from, to))
}
