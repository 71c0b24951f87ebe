//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark holds three in a row, `None` otherwise.
/// At most one mark can hold a line at a time when moves are applied one at
/// a time, so the first match is the winner.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Marked(mark) if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) => {
            Some(mark)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for position in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.apply_move(position, Mark::X).expect("empty cell");
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for position in [Position::TopCenter, Position::Center, Position::BottomCenter] {
            board.apply_move(position, Mark::O).expect("empty cell");
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for position in [Position::TopRight, Position::Center, Position::BottomLeft] {
            board.apply_move(position, Mark::O).expect("empty cell");
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Mark::X).expect("empty cell");
        board.apply_move(Position::TopCenter, Mark::X).expect("empty cell");
        assert_eq!(check_winner(&board), None);
    }
}
