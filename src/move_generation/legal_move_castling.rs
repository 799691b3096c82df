//! Castling preconditions.
//!
//! Castling is legal when the king and the chosen rook have never been
//! touched, the squares between them are empty, the king is not in check,
//! and the king is not attacked on the square it passes through or the one it
//! lands on. Transit and landing squares are tested by really playing the
//! king there and undoing it.

use crate::game_state::board::Board;
use crate::game_state::chess_move::{CastlingSide, Move};
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_checks::{is_king_attacked, is_square_attacked};

pub fn is_castling_legal(board: &mut Board, color: Color, side: CastlingSide) -> bool {
    let king = color.king();
    let home = Coordinate::new(KING_HOME_FILE, color.back_rank());
    let (rook_home, _) = side.rook_squares(color.back_rank());

    if board.piece_at(home) != Some(king) || board.piece_at(rook_home) != Some(color.rook()) {
        return false;
    }
    if board.is_touched(home) || board.is_touched(rook_home) {
        return false;
    }

    let step = match side {
        CastlingSide::QueenSide => -1,
        CastlingSide::KingSide => 1,
    };
    let mut between = home.step_file(step);
    while between != rook_home {
        if !board.is_empty(between) {
            return false;
        }
        between = between.step_file(step);
    }

    if is_square_attacked(board, home, color.opposite()) {
        return false;
    }

    let transit = home.step_file(step);
    let landing = home.step_file(2 * step);
    for target in [transit, landing] {
        let safe = board
            .with_move_applied(Move::new(king, home, target), |after| {
                matches!(is_king_attacked(after, color), Ok(false))
            })
            .unwrap_or(false);
        if !safe {
            return false;
        }
    }

    true
}
