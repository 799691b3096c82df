//! Terminal-oriented ASCII board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the command
//! line. Not a durable format.

use crate::game_state::board::Board;
use crate::game_state::coordinate::Coordinate;

const FILE_BORDER: &str = "  a b c d e f g h";

/// Render the board with rank 8 at the top, White in upper case.
///
/// ```text
///   a b c d e f g h
/// 8 r n b q k b n r 8
/// ...
/// 1 R N B Q K B N R 1
///   a b c d e f g h
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(220);

    out.push_str(FILE_BORDER);
    out.push('\n');

    for rank in (0..8i8).rev() {
        let rank_char = char::from(b'1' + rank as u8);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8i8 {
            match board.piece_at(Coordinate::new(file, rank)) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('.'),
            }
            out.push(' ');
        }

        out.push(rank_char);
        out.push('\n');
    }

    out.push_str(FILE_BORDER);

    out
}
