//! King move shape: one step in any direction. Castling is not a shape and is
//! decided by the legality filter.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::moves::move_shapes::{invalid_shape, is_distinct_on_board};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
pub fn is_shape_valid(from: Coordinate, to: Coordinate) -> bool {
    if !is_distinct_on_board(from, to) {
        return false;
    }
    let (d_file, d_rank) = from.delta_to(to);
    d_file.abs() <= 1 && d_rank.abs() <= 1
}

pub fn path(from: Coordinate, to: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    if !is_shape_valid(from, to) {
        return Err(invalid_shape(PieceKind::King, from, to));
    }
    Ok(Vec::new())
}
