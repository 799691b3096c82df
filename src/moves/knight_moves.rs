//! Knight move shape: an L of one and two squares. Knights jump, so their
//! path is always empty.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::moves::move_shapes::{invalid_shape, is_distinct_on_board};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn is_shape_valid(from: Coordinate, to: Coordinate) -> bool {
    if !is_distinct_on_board(from, to) {
        return false;
    }
    KNIGHT_OFFSETS.contains(&from.delta_to(to))
}

pub fn path(from: Coordinate, to: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    if !is_shape_valid(from, to) {
        return Err(invalid_shape(PieceKind::Knight, from, to));
    }
    Ok(Vec::new())
}
