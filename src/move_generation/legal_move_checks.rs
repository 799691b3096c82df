//! Attack and check detection.
//!
//! A square is attacked when some piece of the attacking color could capture
//! on it under the board-aware shape/path/occupancy rules. Pawns attack only
//! their two forward diagonals, whether or not something stands there. King
//! safety is not part of the question: a pinned piece still gives check.

use crate::chess_errors::{ChessErrors, InvariantViolation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_filter::is_reachable;
use crate::moves::pawn_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Result<Coordinate, ChessErrors> {
    board
        .king_location(color)
        .ok_or_else(|| InvariantViolation::KingMissing(color).into())
}

/// Whether `piece` on `from` attacks `square`.
fn attacks(board: &Board, piece: Piece, from: Coordinate, square: Coordinate) -> bool {
    if piece.kind != PieceKind::Pawn {
        return is_reachable(board, piece, from, square);
    }
    pawn_moves::is_diagonal_step(from, square)
        && piece.is_shape_valid(from, square)
        && board
            .piece_at(square)
            .map_or(true, |occupant| occupant.color != piece.color)
}

/// Whether any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Coordinate, attacker_color: Color) -> bool {
    Coordinate::all().any(|from| match board.piece_at(from) {
        Some(piece) if piece.color == attacker_color => attacks(board, piece, from, square),
        _ => false,
    })
}

/// Whether `color`'s king is attacked on its current square.
#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king_sq = king_square(board, color)?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

/// Every piece of `attacker_color` that attacks `square`, with its origin.
pub fn attackers_of(
    board: &Board,
    square: Coordinate,
    attacker_color: Color,
) -> Vec<(Coordinate, Piece)> {
    board
        .pieces_of(attacker_color)
        .into_iter()
        .filter(|(from, piece)| attacks(board, *piece, *from, square))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{attackers_of, is_king_attacked, is_square_attacked};
    use crate::chess_errors::{ChessErrors, InvariantViolation};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::coordinate::Coordinate;

    fn sq(name: &str) -> Coordinate {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::standard();
        assert_eq!(is_king_attacked(&board, Color::White), Ok(false));
        assert_eq!(is_king_attacked(&board, Color::Black), Ok(false));
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e4"), Color::White));
        assert!(is_square_attacked(&board, sq("c6"), Color::Black));
    }

    #[test]
    fn pawns_attack_diagonally_but_not_forward() {
        let mut board = Board::empty();
        board.place_piece(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
        board.place_piece(sq("d5"), Color::Black.king());
        board.place_piece(sq("a1"), Color::White.king());
        assert_eq!(is_king_attacked(&board, Color::Black), Ok(true));

        board.clear_square(sq("d5"));
        board.place_piece(sq("e5"), Color::Black.king());
        assert_eq!(is_king_attacked(&board, Color::Black), Ok(false));
    }

    #[test]
    fn pawns_attack_empty_diagonals_only() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("e8"), Color::Black.king());
        board.place_piece(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
        board.place_piece(sq("c7"), Piece::new(Color::Black, PieceKind::Pawn));

        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));

        assert!(is_square_attacked(&board, sq("b6"), Color::Black));
        assert!(is_square_attacked(&board, sq("d6"), Color::Black));
        assert!(!is_square_attacked(&board, sq("c6"), Color::Black));
        assert!(!is_square_attacked(&board, sq("c5"), Color::Black));
    }

    #[test]
    fn blocked_slider_does_not_attack() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("e8"), Color::Black.king());
        board.place_piece(sq("e5"), Color::Black.rook());
        assert_eq!(is_king_attacked(&board, Color::White), Ok(true));
        board.place_piece(sq("e3"), Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(is_king_attacked(&board, Color::White), Ok(false));
    }

    #[test]
    fn attackers_are_listed_with_their_squares() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("h8"), Color::Black.king());
        board.place_piece(sq("e7"), Color::Black.rook());
        board.place_piece(sq("d3"), Piece::new(Color::Black, PieceKind::Knight));
        board.place_piece(sq("a5"), Color::Black.bishop());
        let mut attackers = attackers_of(&board, sq("e1"), Color::Black);
        attackers.sort_by_key(|(square, _)| *square);
        assert_eq!(
            attackers,
            vec![
                (sq("a5"), Color::Black.bishop()),
                (sq("d3"), Piece::new(Color::Black, PieceKind::Knight)),
                (sq("e7"), Color::Black.rook()),
            ]
        );
    }

    #[test]
    fn missing_king_is_reported() {
        let board = Board::empty();
        assert_eq!(
            is_king_attacked(&board, Color::White),
            Err(ChessErrors::InvariantViolation(InvariantViolation::KingMissing(Color::White)))
        );
    }
}
