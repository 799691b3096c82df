//! Fully legal move listing.
//!
//! Candidates come from the board-aware filter; each one is then played on the
//! board, the mover's king is tested for attack, and the move is undone. Only
//! destinations that leave the king safe are kept.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_filter::is_legal_move;

/// Whether playing `piece` from `from` to `to` leaves `piece.color`'s king safe.
///
/// The move is assumed to have passed [`is_legal_move`].
pub fn leaves_king_safe(
    board: &mut Board,
    piece: Piece,
    from: Coordinate,
    to: Coordinate,
) -> Result<bool, ChessErrors> {
    let color = piece.color;
    board
        .with_move_applied(Move::new(piece, from, to), |after| {
            is_king_attacked(after, color).map(|attacked| !attacked)
        })?
}

/// Legal destinations for the `color` piece on `from`.
///
/// Empty when `from` is empty or holds an opposing piece.
pub fn query_legal_moves(
    board: &mut Board,
    color: Color,
    from: Coordinate,
) -> Result<Vec<Coordinate>, ChessErrors> {
    let Some(piece) = board.piece_at(from).filter(|piece| piece.color == color) else {
        return Ok(Vec::new());
    };

    let mut legal = Vec::new();
    for to in Coordinate::all() {
        if is_legal_move(board, piece, from, to) && leaves_king_safe(board, piece, from, to)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Every legal `(from, to)` pair for `color`.
pub fn all_legal_moves(
    board: &mut Board,
    color: Color,
) -> Result<Vec<(Coordinate, Coordinate)>, ChessErrors> {
    let mut legal = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        for to in query_legal_moves(board, color, from)? {
            legal.push((from, to));
        }
    }
    Ok(legal)
}

/// Whether `color` has at least one legal move.
pub fn has_any_legal_move(board: &mut Board, color: Color) -> Result<bool, ChessErrors> {
    for (from, _) in board.pieces_of(color) {
        if !query_legal_moves(board, color, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
