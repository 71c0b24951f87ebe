//! Behavioral tests for the search engine through its public interface.

use oxo_engine::{best_move, Board, GameStatus, Mark, Position};

fn board_from(marks: &[(Position, Mark)]) -> Board {
    let mut board = Board::new();
    for (position, mark) in marks {
        board.apply_move(*position, *mark).expect("empty cell");
    }
    board
}

#[test]
fn test_takes_the_winning_cell() {
    // X holds cells 0 and 1 and wins by taking 2; O has no immediate threat.
    let board = board_from(&[
        (Position::TopLeft, Mark::X),
        (Position::MiddleLeft, Mark::O),
        (Position::TopCenter, Mark::X),
        (Position::BottomCenter, Mark::O),
    ]);
    assert_eq!(best_move(&board, Mark::X, Mark::O), Some(Position::TopRight));
}

#[test]
fn test_blocks_the_opponent_threat() {
    // O threatens the top row at cell 2; X has no winning move of its own,
    // so blocking is the only move that avoids a loss.
    let board = board_from(&[
        (Position::TopLeft, Mark::O),
        (Position::Center, Mark::X),
        (Position::TopCenter, Mark::O),
        (Position::BottomRight, Mark::X),
    ]);
    assert_eq!(best_move(&board, Mark::X, Mark::O), Some(Position::TopRight));
}

#[test]
fn test_prefers_the_faster_win() {
    // X can win immediately at cell 8 (top-left/center/bottom-right
    // diagonal). Lower-indexed cells come first in the scan, so only the
    // depth-sensitive scoring makes the immediate win outrank slower wins.
    let board = board_from(&[
        (Position::TopLeft, Mark::X),
        (Position::TopCenter, Mark::O),
        (Position::Center, Mark::X),
        (Position::TopRight, Mark::O),
    ]);
    assert_eq!(
        best_move(&board, Mark::X, Mark::O),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_no_move_on_won_board() {
    let board = board_from(&[
        (Position::TopLeft, Mark::X),
        (Position::MiddleLeft, Mark::O),
        (Position::TopCenter, Mark::X),
        (Position::Center, Mark::O),
        (Position::TopRight, Mark::X),
    ]);
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
    assert_eq!(best_move(&board, Mark::O, Mark::X), None);
}

#[test]
fn test_no_move_on_drawn_board() {
    let board = board_from(&[
        (Position::TopLeft, Mark::X),
        (Position::TopCenter, Mark::O),
        (Position::TopRight, Mark::X),
        (Position::MiddleLeft, Mark::O),
        (Position::Center, Mark::X),
        (Position::MiddleRight, Mark::X),
        (Position::BottomLeft, Mark::O),
        (Position::BottomCenter, Mark::X),
        (Position::BottomRight, Mark::O),
    ]);
    assert_eq!(board.status(), GameStatus::Draw);
    assert_eq!(best_move(&board, Mark::X, Mark::O), None);
}

#[test]
fn test_optimal_play_from_empty_board_draws() {
    let mut board = Board::new();
    let mut to_move = Mark::X;

    while board.status() == GameStatus::InProgress {
        let position = best_move(&board, to_move, to_move.opponent())
            .expect("in-progress board must yield a move");
        board.apply_move(position, to_move).expect("empty cell");
        to_move = to_move.opponent();
    }
    assert_eq!(board.status(), GameStatus::Draw);
}

/// Explores every human reply sequence against the engine and asserts the
/// human never wins.
fn assert_engine_never_loses(board: &mut Board, ai: Mark, human: Mark, to_move: Mark) {
    match board.status() {
        GameStatus::Won(mark) => {
            assert_ne!(mark, human, "engine lost the game:\n{}", board.render());
            return;
        }
        GameStatus::Draw => return,
        GameStatus::InProgress => {}
    }

    if to_move == ai {
        let position = best_move(board, ai, human).expect("in-progress board must yield a move");
        board.apply_move(position, ai).expect("empty cell");
        assert_engine_never_loses(board, ai, human, human);
        board.undo_move(position);
    } else {
        for position in board.available_moves() {
            board.apply_move(position, human).expect("empty cell");
            assert_engine_never_loses(board, ai, human, ai);
            board.undo_move(position);
        }
    }
}

#[test]
fn test_engine_never_loses_moving_first() {
    let mut board = Board::new();
    assert_engine_never_loses(&mut board, Mark::X, Mark::O, Mark::X);
}

#[test]
fn test_engine_never_loses_moving_second() {
    let mut board = Board::new();
    assert_engine_never_loses(&mut board, Mark::O, Mark::X, Mark::X);
}
