//! The mechanical board model.
//!
//! `Board` stores an 8×8 array of optional pieces, a cache of each king's
//! square and the ordered history of applied moves. It knows nothing about
//! turns or legality: `do_move` applies whatever it is given (after a cheap
//! consistency check) and `undo_last_move` is its exact inverse.
//!
//! The king cache is only written by `do_move`, `undo_last_move` and the setup
//! helpers. History is the source of truth for "has this square been touched"
//! and for en-passant timing, which depends on the last move alone.

use crate::chess_errors::{ChessErrors, InvariantViolation};
use crate::game_state::chess_move::{CastlingSide, Move, MoveSpecialness};
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::moves::pawn_moves;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    king_locations: [Option<Coordinate>; 2],
    history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces and no history.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            king_locations: [None; 2],
            history: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as i8;
                board.place_piece(
                    Coordinate::new(file, color.back_rank()),
                    Piece::new(color, *kind),
                );
                board.place_piece(
                    Coordinate::new(file, color.pawn_start_rank()),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Put `piece` on `square` for position setup, returning what was there.
    ///
    /// Off-board squares are ignored. Placing a king moves that color's king
    /// cache; setup is expected to leave one king per color on the board.
    pub fn place_piece(&mut self, square: Coordinate, piece: Piece) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        let replaced = self.clear_square(square);
        self.squares[square.index()] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_locations[piece.color.index()] = Some(square);
        }
        replaced
    }

    /// Remove whatever stands on `square` for position setup.
    pub fn clear_square(&mut self, square: Coordinate) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        let removed = self.squares[square.index()].take();
        if let Some(piece) = removed {
            if piece.kind == PieceKind::King
                && self.king_locations[piece.color.index()] == Some(square)
            {
                self.king_locations[piece.color.index()] = None;
            }
        }
        removed
    }

    /// The occupant of `square`, or `None` for empty and off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Coordinate) -> Option<Piece> {
        if square.is_on_board() {
            self.squares[square.index()]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, square: Coordinate) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Option<Coordinate> {
        self.king_locations[color.index()]
    }

    /// Every piece of `color` with its square, a1 first.
    pub fn pieces_of(&self, color: Color) -> Vec<(Coordinate, Piece)> {
        Coordinate::all()
            .filter_map(|square| {
                self.piece_at(square)
                    .filter(|piece| piece.color == color)
                    .map(|piece| (square, piece))
            })
            .collect()
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Whether any recorded move started or ended on `square`.
    pub fn is_touched(&self, square: Coordinate) -> bool {
        self.history
            .iter()
            .any(|mv| mv.from == square || mv.to == square)
    }

    /// The square of the pawn an en-passant capture `from -> to` would take.
    ///
    /// Requires a diagonal pawn step onto an empty square, with the previous
    /// move being an opposing pawn's double step that landed beside `from` on
    /// the destination file.
    pub fn en_passant_victim(
        &self,
        piece: Piece,
        from: Coordinate,
        to: Coordinate,
    ) -> Option<Coordinate> {
        if piece.kind != PieceKind::Pawn
            || !pawn_moves::is_diagonal_step(from, to)
            || !piece.is_shape_valid(from, to)
            || !self.is_empty(to)
        {
            return None;
        }

        let victim_square = Coordinate::new(to.file(), from.rank());
        let last = self.last_move()?;
        let opposing_pawn = Piece::new(piece.color.opposite(), PieceKind::Pawn);
        if last.piece == opposing_pawn
            && last.is_double_step()
            && last.to == victim_square
            && self.piece_at(victim_square) == Some(opposing_pawn)
        {
            Some(victim_square)
        } else {
            None
        }
    }

    /// Apply `mv` and record it.
    ///
    /// The captured piece and special-move tag are derived from the board: a
    /// king stepping two files from home castles, a pawn stepping diagonally
    /// onto an empty square behind a just-double-stepped pawn captures en
    /// passant, and a pawn reaching the far rank becomes a queen. Returns the
    /// fully populated record that was pushed on the history.
    pub fn do_move(&mut self, mv: Move) -> Result<Move, ChessErrors> {
        let Move {
            piece, from, to, ..
        } = mv;
        if !to.is_on_board() || self.piece_at(from) != Some(piece) {
            return Err(InvariantViolation::PieceMismatch(from).into());
        }

        let mut record = Move::new(piece, from, to);
        let castling = CastlingSide::from_move(piece, from, to);
        if let Some(side) = castling {
            let (rook_from, _) = side.rook_squares(from.rank());
            if self.piece_at(rook_from) != Some(piece.color.rook()) {
                return Err(InvariantViolation::PieceMismatch(rook_from).into());
            }
            record.specialness = MoveSpecialness::Castling(side);
        } else if let Some(captured_at) = self.en_passant_victim(piece, from, to) {
            record.captured = self.piece_at(captured_at);
            record.specialness = MoveSpecialness::EnPassant { captured_at };
        } else {
            record.captured = self.piece_at(to);
            if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
                record.specialness = MoveSpecialness::Promotion;
            }
        }

        self.squares[from.index()] = None;
        match record.specialness {
            MoveSpecialness::Regular => self.squares[to.index()] = Some(piece),
            MoveSpecialness::Promotion => self.squares[to.index()] = Some(piece.color.queen()),
            MoveSpecialness::EnPassant { captured_at } => {
                self.squares[captured_at.index()] = None;
                self.squares[to.index()] = Some(piece);
            }
            MoveSpecialness::Castling(side) => {
                let (rook_from, rook_to) = side.rook_squares(from.rank());
                self.squares[rook_from.index()] = None;
                self.squares[rook_to.index()] = Some(piece.color.rook());
                self.squares[to.index()] = Some(piece);
            }
        }

        if piece.kind == PieceKind::King {
            self.king_locations[piece.color.index()] = Some(to);
        }
        if let Some(captured) = record.captured {
            if captured.kind == PieceKind::King {
                self.king_locations[captured.color.index()] = None;
            }
        }

        self.history.push(record);
        Ok(record)
    }

    /// Reverse the most recent move exactly, returning its record.
    pub fn undo_last_move(&mut self) -> Result<Move, ChessErrors> {
        let mv = self
            .history
            .pop()
            .ok_or(InvariantViolation::EmptyHistory)?;

        self.squares[mv.to.index()] = None;
        self.squares[mv.from.index()] = Some(mv.piece);
        match mv.specialness {
            MoveSpecialness::Regular | MoveSpecialness::Promotion => {
                self.squares[mv.to.index()] = mv.captured;
            }
            MoveSpecialness::EnPassant { captured_at } => {
                self.squares[captured_at.index()] = mv.captured;
            }
            MoveSpecialness::Castling(side) => {
                let (rook_from, rook_to) = side.rook_squares(mv.from.rank());
                self.squares[rook_to.index()] = None;
                self.squares[rook_from.index()] = Some(mv.piece.color.rook());
            }
        }

        if mv.piece.kind == PieceKind::King {
            self.king_locations[mv.piece.color.index()] = Some(mv.from);
        }
        if let Some(captured) = mv.captured {
            if captured.kind == PieceKind::King {
                self.king_locations[captured.color.index()] = Some(mv.to);
            }
        }

        Ok(mv)
    }

    /// 8×8 ASCII grid with file and rank borders, for debugging.
    pub fn to_display_string(&self) -> String {
        render_board(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_errors::{ChessErrors, InvariantViolation};
    use crate::game_state::chess_move::{CastlingSide, Move, MoveSpecialness};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::coordinate::Coordinate;

    fn sq(name: &str) -> Coordinate {
        name.parse().expect("test square should parse")
    }

    fn pawn(color: Color) -> Piece {
        Piece::new(color, PieceKind::Pawn)
    }

    fn apply(board: &mut Board, from: &str, to: &str) -> Move {
        let piece = board.piece_at(sq(from)).expect("origin should hold a piece");
        board
            .do_move(Move::new(piece, sq(from), sq(to)))
            .expect("move should apply")
    }

    /// Apply then undo, asserting the board is restored square for square.
    fn assert_symmetric(board: &mut Board, from: &str, to: &str) -> Move {
        let before = board.clone();
        let record = apply(board, from, to);
        assert_ne!(*board, before);
        let undone = board.undo_last_move().expect("undo should succeed");
        assert_eq!(undone, record);
        assert_eq!(*board, before);
        record
    }

    #[test]
    fn standard_board_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces_of(Color::White).len(), 16);
        assert_eq!(board.pieces_of(Color::Black).len(), 16);
        assert_eq!(board.piece_at(sq("d1")), Some(Color::White.queen()));
        assert_eq!(board.piece_at(sq("e8")), Some(Color::Black.king()));
        assert_eq!(board.king_location(Color::White), Some(sq("e1")));
        assert_eq!(board.king_location(Color::Black), Some(sq("e8")));
        assert!(board.is_empty(sq("e4")));
        assert!(board.history().is_empty());
    }

    #[test]
    fn off_board_squares_read_as_empty() {
        let board = Board::standard();
        assert_eq!(board.piece_at(Coordinate::new(-1, 0)), None);
        assert_eq!(board.piece_at(Coordinate::new(0, 8)), None);
    }

    #[test]
    fn undo_on_empty_history_is_an_invariant_violation() {
        let mut board = Board::standard();
        assert_eq!(
            board.undo_last_move(),
            Err(ChessErrors::InvariantViolation(InvariantViolation::EmptyHistory))
        );
    }

    #[test]
    fn do_move_rejects_a_piece_that_is_not_there() {
        let mut board = Board::standard();
        let before = board.clone();
        let wrong = Move::new(Color::White.queen(), sq("e2"), sq("e4"));
        assert_eq!(
            board.do_move(wrong),
            Err(ChessErrors::InvariantViolation(InvariantViolation::PieceMismatch(sq("e2"))))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn quiet_move_and_capture_are_symmetric() {
        let mut board = Board::standard();
        let quiet = assert_symmetric(&mut board, "g1", "f3");
        assert_eq!(quiet.specialness, MoveSpecialness::Regular);
        assert_eq!(quiet.captured, None);

        apply(&mut board, "e2", "e4");
        apply(&mut board, "d7", "d5");
        let capture = assert_symmetric(&mut board, "e4", "d5");
        assert_eq!(capture.captured, Some(pawn(Color::Black)));
        assert_eq!(board.history().len(), 2);
    }

    #[test]
    fn king_moves_update_and_restore_the_cache() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("e8"), Color::Black.king());
        apply(&mut board, "e1", "d2");
        assert_eq!(board.king_location(Color::White), Some(sq("d2")));
        board.undo_last_move().expect("undo");
        assert_eq!(board.king_location(Color::White), Some(sq("e1")));
    }

    #[test]
    fn en_passant_capture_is_symmetric() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("e8"), Color::Black.king());
        board.place_piece(sq("e5"), pawn(Color::White));
        board.place_piece(sq("d7"), pawn(Color::Black));
        apply(&mut board, "d7", "d5");

        assert_eq!(
            board.en_passant_victim(pawn(Color::White), sq("e5"), sq("d6")),
            Some(sq("d5"))
        );
        let record = assert_symmetric(&mut board, "e5", "d6");
        assert_eq!(
            record.specialness,
            MoveSpecialness::EnPassant {
                captured_at: sq("d5")
            }
        );
        assert_eq!(record.captured, Some(pawn(Color::Black)));

        apply(&mut board, "e5", "d6");
        assert!(board.is_empty(sq("d5")));
        assert_eq!(board.piece_at(sq("d6")), Some(pawn(Color::White)));
    }

    #[test]
    fn en_passant_needs_the_double_step_to_be_the_last_move() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("e8"), Color::Black.king());
        board.place_piece(sq("e5"), pawn(Color::White));
        board.place_piece(sq("d7"), pawn(Color::Black));
        apply(&mut board, "d7", "d5");
        apply(&mut board, "e1", "f1");
        apply(&mut board, "e8", "f8");
        assert_eq!(
            board.en_passant_victim(pawn(Color::White), sq("e5"), sq("d6")),
            None
        );
    }

    #[test]
    fn single_step_beside_a_pawn_is_not_en_passant() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        board.place_piece(sq("e8"), Color::Black.king());
        board.place_piece(sq("e5"), pawn(Color::White));
        board.place_piece(sq("d6"), pawn(Color::Black));
        let record = apply(&mut board, "d6", "d5");
        assert!(!record.is_double_step());
        assert_eq!(
            board.en_passant_victim(pawn(Color::White), sq("e5"), sq("d6")),
            None
        );
    }

    #[test]
    fn castling_moves_the_rook_and_undoes_exactly() {
        for (color, king_from, king_to, rook_from, rook_to, side) in [
            (Color::White, "e1", "g1", "h1", "f1", CastlingSide::KingSide),
            (Color::White, "e1", "c1", "a1", "d1", CastlingSide::QueenSide),
            (Color::Black, "e8", "g8", "h8", "f8", CastlingSide::KingSide),
            (Color::Black, "e8", "c8", "a8", "d8", CastlingSide::QueenSide),
        ] {
            let mut board = Board::empty();
            board.place_piece(sq("e1"), Color::White.king());
            board.place_piece(sq("e8"), Color::Black.king());
            board.place_piece(sq(rook_from), color.rook());

            let record = assert_symmetric(&mut board, king_from, king_to);
            assert_eq!(record.castling_side(), Some(side));

            apply(&mut board, king_from, king_to);
            assert_eq!(board.piece_at(sq(rook_to)), Some(color.rook()));
            assert!(board.is_empty(sq(rook_from)));
            assert_eq!(board.king_location(color), Some(sq(king_to)));
        }
    }

    #[test]
    fn promotion_becomes_a_queen_and_undo_restores_the_pawn() {
        let mut board = Board::empty();
        board.place_piece(sq("a1"), Color::White.king());
        board.place_piece(sq("h8"), Color::Black.king());
        board.place_piece(sq("b7"), pawn(Color::White));
        board.place_piece(sq("c8"), Color::Black.rook());

        let push = assert_symmetric(&mut board, "b7", "b8");
        assert!(push.is_promotion());
        let capture = assert_symmetric(&mut board, "b7", "c8");
        assert!(capture.is_promotion());
        assert_eq!(capture.captured, Some(Color::Black.rook()));

        apply(&mut board, "b7", "c8");
        assert_eq!(board.piece_at(sq("c8")), Some(Color::White.queen()));
        board.undo_last_move().expect("undo");
        assert_eq!(board.piece_at(sq("b7")), Some(pawn(Color::White)));
        assert_eq!(board.piece_at(sq("c8")), Some(Color::Black.rook()));
    }

    #[test]
    fn touched_squares_follow_history() {
        let mut board = Board::standard();
        assert!(!board.is_touched(sq("g1")));
        apply(&mut board, "g1", "f3");
        assert!(board.is_touched(sq("g1")));
        assert!(board.is_touched(sq("f3")));
        board.undo_last_move().expect("undo");
        assert!(!board.is_touched(sq("g1")));
    }

    #[test]
    fn setup_keeps_king_cache_consistent() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), Color::White.king());
        assert_eq!(board.clear_square(sq("e1")), Some(Color::White.king()));
        assert_eq!(board.king_location(Color::White), None);
        board.place_piece(sq("c3"), Color::White.king());
        assert_eq!(board.king_location(Color::White), Some(sq("c3")));
        assert_eq!(board.place_piece(Coordinate::new(9, 9), Color::White.queen()), None);
    }
}
