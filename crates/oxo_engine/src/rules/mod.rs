//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe rules,
//! separated from board storage so the search engine and the board itself
//! can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, GameStatus};

/// Derives the game status from a board.
///
/// A winning line takes precedence over a full board; a full board with no
/// winner is a draw; anything else is still in progress.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
