//! Errors used throughout the referee.
//!
//! `ChessErrors` is the single error type returned by game logic, notation
//! parsing and board mutation. Caller-facing conditions (illegal moves,
//! malformed notation, draw bookkeeping) are recoverable and meant to be shown
//! to a player. `InvariantViolation` variants indicate a bug in the engine or a
//! corrupted hand-built position and are not meant to be recovered from.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::coordinate::Coordinate;

/// Why a requested move was refused by the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("there is no piece at that location")]
    NoPieceAtLocation,
    #[error("that piece belongs to your opponent")]
    NotYourPiece,
    /// Shape, blocked path, occupancy or castling precondition failure.
    #[error("that piece cannot move there")]
    IllegalMove,
    #[error("that move would leave your king in check")]
    LeavesKingInCheck,
    #[error("the game is over")]
    GameOver,
}

/// Engine-internal consistency failures.
///
/// These never happen during legal play through `GameState`; seeing one means
/// the engine or a hand-built position is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("undo requested with an empty move history")]
    EmptyHistory,
    #[error("the {0:?} king is missing from the board")]
    KingMissing(Color),
    #[error("the square {0} does not hold the piece being moved")]
    PieceMismatch(Coordinate),
}

/// Unified error type for the referee.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),

    /// Input was not exactly a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("malformed algebraic notation: {0:?}")]
    MalformedNotation(String),

    /// A path was requested for a displacement the piece kind cannot make.
    #[error("{kind:?} cannot move from {from} to {to}")]
    InvalidShape {
        kind: PieceKind,
        from: Coordinate,
        to: Coordinate,
    },

    #[error("there is no pending draw request")]
    NoDrawRequest,

    #[error("a draw request from this player is already pending")]
    DrawAlreadyRequested,

    #[error("a draw request cannot be answered by the player who made it")]
    CannotAnswerOwnDrawRequest,

    #[error("internal invariant violated: {0}")]
    InvariantViolation(InvariantViolation),
}

impl From<IllegalMoveReason> for ChessErrors {
    fn from(reason: IllegalMoveReason) -> Self {
        ChessErrors::IllegalMove(reason)
    }
}

impl From<InvariantViolation> for ChessErrors {
    fn from(violation: InvariantViolation) -> Self {
        ChessErrors::InvariantViolation(violation)
    }
}
