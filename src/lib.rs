//! Crate root module declarations for the chess referee.
//!
//! The referee validates moves, detects check, checkmate and stalemate, and
//! keeps the turn order of a single two-player game. Binaries, benches and
//! tests import the stable module paths declared here.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinate;
    pub mod game_state;
    pub mod shared_game;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shapes;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_generator;
    pub mod mate_detection;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
    #[cfg(test)]
    pub mod test_positions;
}
