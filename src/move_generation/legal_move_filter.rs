//! Board-aware move legality, short of king safety.
//!
//! `is_legal_move` answers whether a piece may make a move given the pieces
//! on the board: valid shape, clear path, a destination that is empty or
//! holds an opponent, the pawn capture rules (including en passant) and the
//! castling preconditions. It does not ask whether the mover's own king ends
//! up in check; that needs the full apply/undo simulation in
//! `legal_move_generator`.

use crate::game_state::board::Board;
use crate::game_state::chess_move::CastlingSide;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_castling::is_castling_legal;
use crate::moves::pawn_moves;

/// Whether `piece` standing on `from` may move to `to`, ignoring king safety.
///
/// Takes the board mutably because castling tests its transit squares by
/// actually playing the king there and undoing it.
pub fn is_legal_move(board: &mut Board, piece: Piece, from: Coordinate, to: Coordinate) -> bool {
    if let Some(side) = CastlingSide::from_move(piece, from, to) {
        return is_castling_legal(board, piece.color, side);
    }
    is_reachable(board, piece, from, to)
}

/// Shape, path, destination and pawn rules; everything but castling.
///
/// This is also the attack primitive: castling can never land on an occupied
/// square, so it never contributes an attack.
pub fn is_reachable(board: &Board, piece: Piece, from: Coordinate, to: Coordinate) -> bool {
    if !piece.is_shape_valid(from, to) {
        return false;
    }

    let Ok(path) = piece.path(from, to) else {
        return false;
    };
    if !path.into_iter().all(|square| board.is_empty(square)) {
        return false;
    }

    let target = board.piece_at(to);
    if matches!(target, Some(occupant) if occupant.color == piece.color) {
        return false;
    }

    if piece.kind != PieceKind::Pawn {
        return true;
    }

    if pawn_moves::is_diagonal_step(from, to) {
        target.is_some() || board.en_passant_victim(piece, from, to).is_some()
    } else {
        target.is_none()
    }
}
