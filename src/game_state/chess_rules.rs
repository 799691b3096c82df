//! Canonical chess-rule constants.
//!
//! Board geometry and the standard starting layout used to set up a new game
//! and to locate castling squares.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: i8 = 8;

pub const WHITE_BACK_RANK: i8 = 0;
pub const BLACK_BACK_RANK: i8 = 7;
pub const WHITE_PAWN_START_RANK: i8 = 1;
pub const BLACK_PAWN_START_RANK: i8 = 6;

/// File the king starts on (the e-file).
pub const KING_HOME_FILE: i8 = 4;
/// Rook corner on the queen side (a-file) and king side (h-file).
pub const QUEEN_SIDE_ROOK_FILE: i8 = 0;
pub const KING_SIDE_ROOK_FILE: i8 = 7;

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
