//! The turn machine wrapped around a board.
//!
//! `GameState` owns one `Board` and adds whose turn it is, the overall
//! outcome, pending draw requests and timestamps. It is the only place where a
//! real (non-speculative) move is validated end to end: turn order, piece
//! ownership, the board-aware legality filter, and finally king safety by
//! applying the move and rolling it back if the mover's king is left attacked.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::chess_errors::{ChessErrors, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Color, Outcome, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_filter::is_legal_move;
use crate::move_generation::legal_move_generator::query_legal_moves;
use crate::move_generation::mate_detection::{is_checkmate, is_stalemate};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    starting_color: Color,
    outcome: Outcome,
    draw_requested_by: Option<Color>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard position with White to move.
    pub fn new() -> Self {
        Self::with_starting_color(Color::White)
    }

    /// A new game from the standard position with `starting_color` to move.
    pub fn with_starting_color(starting_color: Color) -> Self {
        Self::from_board(Board::standard(), starting_color)
    }

    /// A game continuing from an arbitrary board with `turn` to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let now = Utc::now();
        Self {
            board,
            turn,
            starting_color: turn,
            outcome: Outcome::Playing,
            draw_requested_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn starting_color(&self) -> Color {
        self.starting_color
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn draw_requested_by(&self) -> Option<Color> {
        self.draw_requested_by
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Validate and play `from -> to` for `color`.
    ///
    /// On any failure the board is left exactly as it was. On success the turn
    /// passes to the opponent, a pending draw request lapses, and the outcome
    /// is updated if the opponent is now checkmated or stalemated.
    pub fn make_move(
        &mut self,
        color: Color,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Move, ChessErrors> {
        let mv = self
            .validate_and_apply(color, from, to)
            .inspect_err(|err| debug!("{color} move {from}{to} rejected: {err}"))?;

        let outcome = match self.outcome_after_move(color) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.board.undo_last_move()?;
                return Err(err);
            }
        };

        debug!("{color} played {mv}");
        self.turn = color.opposite();
        self.draw_requested_by = None;
        self.touch();
        if outcome.is_over() {
            self.finish(outcome);
        }
        Ok(mv)
    }

    /// [`GameState::make_move`] with algebraic square names.
    pub fn make_move_notation(
        &mut self,
        color: Color,
        from: &str,
        to: &str,
    ) -> Result<Move, ChessErrors> {
        let from = Coordinate::from_notation(from)?;
        let to = Coordinate::from_notation(to)?;
        self.make_move(color, from, to)
    }

    fn validate_and_apply(
        &mut self,
        color: Color,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Move, ChessErrors> {
        if self.outcome.is_over() {
            return Err(IllegalMoveReason::GameOver.into());
        }
        if color != self.turn {
            return Err(IllegalMoveReason::NotYourTurn.into());
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(IllegalMoveReason::NoPieceAtLocation)?;
        if piece.color != color {
            return Err(IllegalMoveReason::NotYourPiece.into());
        }
        if !is_legal_move(&mut self.board, piece, from, to) {
            return Err(IllegalMoveReason::IllegalMove.into());
        }
        // Kings are checked and mated, never taken.
        if matches!(self.board.piece_at(to), Some(target) if target.kind == PieceKind::King) {
            return Err(IllegalMoveReason::IllegalMove.into());
        }

        let mv = self.board.do_move(Move::new(piece, from, to))?;
        if is_king_attacked(&self.board, color)? {
            self.board.undo_last_move()?;
            return Err(IllegalMoveReason::LeavesKingInCheck.into());
        }
        Ok(mv)
    }

    /// The result of the game once `mover`'s move is on the board.
    fn outcome_after_move(&mut self, mover: Color) -> Result<Outcome, ChessErrors> {
        let opponent = mover.opposite();
        if is_checkmate(&mut self.board, opponent)? {
            Ok(Outcome::win_for(mover))
        } else if is_stalemate(&mut self.board, opponent)? {
            Ok(Outcome::Draw)
        } else {
            Ok(Outcome::Playing)
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!("game over: {outcome:?}");
        self.outcome = outcome;
        self.draw_requested_by = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Take back the most recent move, whoever played it.
    ///
    /// The turn returns to the player who made it and a finished game resumes.
    pub fn undo_last_move(&mut self) -> Result<Move, ChessErrors> {
        let mv = self.board.undo_last_move()?;
        debug!("took back {mv}");
        self.turn = mv.piece.color;
        self.outcome = Outcome::Playing;
        self.draw_requested_by = None;
        self.touch();
        Ok(mv)
    }

    /// Legal destinations for the `color` piece on `from`, whoever's turn it is.
    pub fn query_moves(
        &mut self,
        color: Color,
        from: Coordinate,
    ) -> Result<Vec<Coordinate>, ChessErrors> {
        query_legal_moves(&mut self.board, color, from)
    }

    /// [`GameState::query_moves`] with algebraic names in and out.
    pub fn query_moves_notation(
        &mut self,
        color: Color,
        from: &str,
    ) -> Result<Vec<String>, ChessErrors> {
        let from = Coordinate::from_notation(from)?;
        Ok(self
            .query_moves(color, from)?
            .into_iter()
            .map(|to| to.to_string())
            .collect())
    }

    pub fn is_king_attacked(&self, color: Color) -> Result<bool, ChessErrors> {
        is_king_attacked(&self.board, color)
    }

    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, ChessErrors> {
        is_checkmate(&mut self.board, color)
    }

    pub fn is_stalemate(&mut self, color: Color) -> Result<bool, ChessErrors> {
        is_stalemate(&mut self.board, color)
    }

    /// Offer a draw. A counter offer accepts the pending one; repeating your
    /// own offer is refused.
    pub fn request_draw(&mut self, color: Color) -> Result<(), ChessErrors> {
        if self.outcome.is_over() {
            return Err(IllegalMoveReason::GameOver.into());
        }
        if self.draw_requested_by == Some(color) {
            return Err(ChessErrors::DrawAlreadyRequested);
        }
        if self.draw_requested_by == Some(color.opposite()) {
            return self.accept_draw(color);
        }
        debug!("{color} offers a draw");
        self.draw_requested_by = Some(color);
        self.touch();
        Ok(())
    }

    pub fn accept_draw(&mut self, color: Color) -> Result<(), ChessErrors> {
        self.answerable_draw_request(color)?;
        self.finish(Outcome::Draw);
        Ok(())
    }

    pub fn decline_draw(&mut self, color: Color) -> Result<(), ChessErrors> {
        self.answerable_draw_request(color)?;
        debug!("{color} declines the draw");
        self.draw_requested_by = None;
        self.touch();
        Ok(())
    }

    fn answerable_draw_request(&self, color: Color) -> Result<(), ChessErrors> {
        if self.outcome.is_over() {
            return Err(IllegalMoveReason::GameOver.into());
        }
        match self.draw_requested_by {
            None => Err(ChessErrors::NoDrawRequest),
            Some(requester) if requester == color => Err(ChessErrors::CannotAnswerOwnDrawRequest),
            Some(_) => Ok(()),
        }
    }

    /// `color` gives up; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<(), ChessErrors> {
        if self.outcome.is_over() {
            return Err(IllegalMoveReason::GameOver.into());
        }
        info!("{color} resigns");
        self.finish(Outcome::win_for(color.opposite()));
        Ok(())
    }
}
