//! Legal move tree node counting.
//!
//! Perft walks every legal move sequence to a fixed depth and counts the
//! leaves. Published counts for well-known positions make it the standard
//! cross-check of a move generator. Promotions here always produce a queen,
//! so counts only match published tables at depths without promotions.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn record_leaf(&mut self, mv: &Move) {
        self.nodes += 1;
        self.captures += u64::from(mv.is_capture());
        self.en_passant += u64::from(mv.is_en_passant());
        self.castles += u64::from(mv.castling_side().is_some());
        self.promotions += u64::from(mv.is_promotion());
    }
}

/// Count leaf nodes `depth` plies below the current board, `color` to move.
pub fn perft(board: &mut Board, color: Color, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to) in all_legal_moves(board, color)? {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        let record = board.do_move(Move::new(piece, from, to))?;
        if depth == 1 {
            total.record_leaf(&record);
        } else {
            total.merge(perft(board, color.opposite(), depth - 1)?);
        }
        board.undo_last_move()?;
    }

    Ok(total)
}

/// Per-root-move node counts, useful to locate a disagreement with a reference.
pub fn perft_divide(
    board: &mut Board,
    color: Color,
    depth: u8,
) -> Result<Vec<(Move, u64)>, ChessErrors> {
    let mut divided = Vec::new();
    if depth == 0 {
        return Ok(divided);
    }
    for (from, to) in all_legal_moves(board, color)? {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        let record = board.do_move(Move::new(piece, from, to))?;
        let nodes = perft(board, color.opposite(), depth - 1)?.nodes;
        board.undo_last_move()?;
        divided.push((record, nodes));
    }
    Ok(divided)
}
