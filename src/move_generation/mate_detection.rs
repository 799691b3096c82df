//! Checkmate and stalemate detection.
//!
//! Checkmate is decided in three steps: the king must be attacked, it must
//! have no safe square to step to, and no other friendly piece may have a
//! single move that deals with every attacker at once (capturing it, standing
//! in its line, or taking a checking pawn en passant). Each candidate escape is
//! confirmed by playing it and testing the king, so pinned defenders and
//! discovered attacks are handled without special cases.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_checks::{attackers_of, is_square_attacked, king_square};
use crate::move_generation::legal_move_filter::is_legal_move;
use crate::move_generation::legal_move_generator::{has_any_legal_move, leaves_king_safe};
use crate::moves::king_moves::KING_OFFSETS;

pub fn is_checkmate(board: &mut Board, color: Color) -> Result<bool, ChessErrors> {
    let king_sq = king_square(board, color)?;
    let enemy = color.opposite();
    if !is_square_attacked(board, king_sq, enemy) {
        return Ok(false);
    }

    let king = color.king();
    for (d_file, d_rank) in KING_OFFSETS {
        let to = king_sq.offset(d_file, d_rank);
        if is_legal_move(board, king, king_sq, to) && leaves_king_safe(board, king, king_sq, to)? {
            return Ok(false);
        }
    }

    let candidates = squares_resolving_every_attacker(board, king_sq, enemy);
    if candidates.is_empty() {
        return Ok(true);
    }

    for (from, piece) in board.pieces_of(color) {
        if piece.kind == PieceKind::King {
            continue;
        }
        for to in &candidates {
            if is_legal_move(board, piece, from, *to) && leaves_king_safe(board, piece, from, *to)? {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

pub fn is_stalemate(board: &mut Board, color: Color) -> Result<bool, ChessErrors> {
    let king_sq = king_square(board, color)?;
    if is_square_attacked(board, king_sq, color.opposite()) {
        return Ok(false);
    }
    Ok(!has_any_legal_move(board, color)?)
}

/// Destination squares where one non-king move could neutralise every attacker.
fn squares_resolving_every_attacker(
    board: &Board,
    king_sq: Coordinate,
    enemy: Color,
) -> Vec<Coordinate> {
    let mut attackers = attackers_of(board, king_sq, enemy).into_iter();
    let Some(first) = attackers.next() else {
        return Vec::new();
    };

    let mut shared = resolving_squares(first, king_sq);
    for attacker in attackers {
        let squares = resolving_squares(attacker, king_sq);
        shared.retain(|square| squares.contains(square));
    }
    shared
}

/// The attacker's own square, the squares on its line to the king, and for a
/// pawn the square behind it where an en-passant capture would land.
fn resolving_squares((attacker_sq, attacker): (Coordinate, Piece), king_sq: Coordinate) -> Vec<Coordinate> {
    let mut squares = vec![attacker_sq];
    squares.extend(attacker.path(attacker_sq, king_sq).unwrap_or_default());
    if attacker.kind == PieceKind::Pawn {
        squares.push(attacker_sq.step_rank(-attacker.color.forward()));
    }
    squares
}
