//! Minimax search with alpha-beta pruning.
//!
//! The search explores the game tree by mutating a single scratch board in
//! place: every candidate move is applied, evaluated recursively, and
//! retracted before the next candidate is tried. Retraction is owned by
//! [`MoveGuard`], which undoes its move when dropped, so no exit path
//! (including pruning breaks) can leak a simulated move onto the board.

use crate::position::Position;
use crate::types::{Board, Cell, GameStatus, Mark};
use tracing::{debug, instrument};

/// Base score for a decided game. Wins and losses are offset by search depth
/// so that faster wins and slower losses score better. Depth never exceeds 9
/// on this board, so the win and loss bands cannot overlap.
const WIN_SCORE: i32 = 10;

/// Returns the optimal move for `ai` on the given board.
///
/// Returns `None` if the board is already decided. The caller's board is
/// never mutated: the search runs on a scratch copy taken once at the root,
/// and the apply/undo protocol restores that copy after every simulated
/// branch.
///
/// Candidate moves are examined in ascending cell order and ties are broken
/// in favor of the first best move seen, so the result is deterministic for
/// a given board.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Mark, human: Mark) -> Option<Position> {
    let mut scratch = board.clone();
    let (score, position) = search(&mut scratch, ai, human, 0, true, i32::MIN, i32::MAX);
    debug_assert_eq!(scratch, *board, "search must restore the board");
    debug!(?position, score, "Search complete");
    position
}

/// Applies a move for the duration of a search branch.
///
/// The move is retracted when the guard drops, which makes an unpaired
/// apply/undo unrepresentable rather than a runtime-checked condition.
struct MoveGuard<'b> {
    board: &'b mut Board,
    position: Position,
}

impl<'b> MoveGuard<'b> {
    fn place(board: &'b mut Board, position: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(position));
        board.write(position, Cell::Marked(mark));
        Self { board, position }
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.position);
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// `depth` counts plies already played in this branch (0 at the root).
/// Decided boards score `WIN_SCORE - depth` for an `ai` win, `depth -
/// WIN_SCORE` for a `human` win, and 0 for a draw. Pruning stops scanning
/// candidates once `beta <= alpha`; with the strict comparisons below it
/// never changes the score or move the root returns.
fn search(
    board: &mut Board,
    ai: Mark,
    human: Mark,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<Position>) {
    match board.status() {
        GameStatus::Won(mark) => {
            let score = if mark == ai {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
            return (score, None);
        }
        GameStatus::Draw => return (0, None),
        GameStatus::InProgress => {}
    }

    let mut chosen = None;
    if maximizing {
        let mut best_score = i32::MIN;
        for position in board.available_moves() {
            let (score, _) = {
                let mut placed = MoveGuard::place(board, position, ai);
                search(placed.board(), ai, human, depth + 1, false, alpha, beta)
            };
            if score > best_score {
                best_score = score;
                chosen = Some(position);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, chosen)
    } else {
        let mut best_score = i32::MAX;
        for position in board.available_moves() {
            let (score, _) = {
                let mut placed = MoveGuard::place(board, position, human);
                search(placed.board(), ai, human, depth + 1, true, alpha, beta)
            };
            if score < best_score {
                best_score = score;
                chosen = Some(position);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, chosen)
    }
}
