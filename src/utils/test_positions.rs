//! Position builders for tests.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;

/// Build a board from the piece-placement field of a FEN record
/// (rank 8 first, digits for empty runs, upper case for White).
pub fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = 7 - row as i8;
        let mut file = 0i8;
        for symbol in rank_text.chars() {
            if let Some(skip) = symbol.to_digit(10) {
                file += skip as i8;
                continue;
            }
            let color = if symbol.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match symbol.to_ascii_uppercase() {
                'P' => PieceKind::Pawn,
                'N' => PieceKind::Knight,
                'B' => PieceKind::Bishop,
                'R' => PieceKind::Rook,
                'Q' => PieceKind::Queen,
                'K' => PieceKind::King,
                other => panic!("unexpected placement symbol {other:?}"),
            };
            board.place_piece(Coordinate::new(file, rank), Piece::new(color, kind));
            file += 1;
        }
    }
    board
}
