//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A mark placed on the board.
///
/// Marks are symbols, not roles: which of the two marks the human or the
/// engine plays is decided by the caller at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

/// Status of the game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if the game has a decided outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is mutated in place: moves are applied with [`Board::apply_move`]
/// and retracted with [`Board::undo_move`]. The search engine relies on this
/// pairing to explore the game tree without copying the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.to_index()]
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns all empty positions in ascending index order.
    ///
    /// The ordering is part of the contract: the search engine breaks score
    /// ties by taking the first best move it sees, so enumeration order
    /// decides which of several equally good moves is played.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::iter()
            .filter(|position| self.is_empty(*position))
            .collect()
    }

    /// Places a mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark; the
    /// board is left unchanged.
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }
        self.write(position, Cell::Marked(mark));
        Ok(())
    }

    /// Resets the given cell to empty, regardless of its prior value.
    ///
    /// Caller contract: only used to unwind a matching [`Board::apply_move`],
    /// most recently applied on that cell.
    pub fn undo_move(&mut self, position: Position) {
        self.write(position, Cell::Empty);
    }

    /// Derives the game status from the current cells.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// Formats the board as a 3x3 textual grid.
    ///
    /// Empty cells show their displayed position (1-9) so players can pick a
    /// square by number.
    pub fn render(&self) -> String {
        let mut grid = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                grid.push(' ');
                grid.push_str(&symbol);
                grid.push(' ');
                if col < 2 {
                    grid.push('|');
                }
            }
            if row < 2 {
                grid.push_str("\n---+---+---\n");
            }
        }
        grid
    }

    pub(crate) fn write(&mut self, position: Position, cell: Cell) {
        self.cells[position.to_index()] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
