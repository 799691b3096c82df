//! A game handle that can be cloned across threads.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Color, Outcome};
use crate::game_state::coordinate::Coordinate;
use crate::game_state::game_state::GameState;

/// Shared ownership of one [`GameState`]; every call holds the lock for its
/// whole duration, so speculative probes never leak between callers.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(game: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Direct access for callers that need several operations under one lock.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock()
    }

    pub fn make_move(&self, color: Color, from: Coordinate, to: Coordinate) -> Result<Move, ChessErrors> {
        self.inner.lock().make_move(color, from, to)
    }

    pub fn make_move_notation(&self, color: Color, from: &str, to: &str) -> Result<Move, ChessErrors> {
        self.inner.lock().make_move_notation(color, from, to)
    }

    pub fn query_moves(&self, color: Color, from: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
        self.inner.lock().query_moves(color, from)
    }

    pub fn undo_last_move(&self) -> Result<Move, ChessErrors> {
        self.inner.lock().undo_last_move()
    }

    pub fn turn(&self) -> Color {
        self.inner.lock().turn()
    }

    pub fn outcome(&self) -> Outcome {
        self.inner.lock().outcome()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedGame;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use std::thread;

    #[test]
    fn clones_see_the_same_game() {
        let game = SharedGame::new(GameState::new());
        let other = game.clone();
        game.make_move_notation(Color::White, "e2", "e4").expect("legal");
        assert_eq!(other.turn(), Color::Black);
        assert_eq!(other.snapshot().board().history().len(), 1);
    }

    #[test]
    fn queries_from_another_thread_leave_the_board_untouched() {
        let game = SharedGame::new(GameState::new());
        let before = game.snapshot().board().clone();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let game = game.clone();
                thread::spawn(move || {
                    let from = "g1".parse().expect("square");
                    for _ in 0..10 {
                        assert_eq!(game.query_moves(Color::White, from).expect("query").len(), 2);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("query thread panicked");
        }

        assert_eq!(*game.snapshot().board(), before);
        game.make_move_notation(Color::White, "g1", "f3").expect("legal");
        assert_eq!(game.lock().turn(), Color::Black);
    }
}
