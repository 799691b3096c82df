//! Speculative move application.
//!
//! Every question of the form "what would the board look like after this
//! move?" (king safety of a candidate, castling transit squares, checkmate
//! escapes) goes through [`Board::with_move_applied`], which applies the
//! move, evaluates a read-only probe and always undoes the move again.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;

impl Board {
    /// Apply `mv`, evaluate `probe` on the resulting board, then undo.
    ///
    /// The probe only sees `&Board`, so the board after this call is equal to
    /// the board before it whenever `Ok` is returned.
    pub fn with_move_applied<T>(
        &mut self,
        mv: Move,
        probe: impl FnOnce(&Board) -> T,
    ) -> Result<T, ChessErrors> {
        self.do_move(mv)?;
        let result = probe(self);
        self.undo_last_move()?;
        Ok(result)
    }
}
