//! Queen move shape: the union of rook and bishop shapes. Paths defer to
//! whichever of the two lines the displacement lies on.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::moves::move_shapes::invalid_shape;
use crate::moves::{bishop_moves, rook_moves};

#[inline]
pub fn is_shape_valid(from: Coordinate, to: Coordinate) -> bool {
    rook_moves::is_shape_valid(from, to) || bishop_moves::is_shape_valid(from, to)
}

pub fn path(from: Coordinate, to: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    if rook_moves::is_shape_valid(from, to) {
        rook_moves::path(from, to)
    } else if bishop_moves::is_shape_valid(from, to) {
        bishop_moves::path(from, to)
    } else {
        Err(invalid_shape(PieceKind::Queen, from, to))
    }
}
