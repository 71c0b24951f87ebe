//! Engine error types.

use crate::position::Position;

/// Error that can occur when applying a move to the board.
///
/// This is the only error kind in the engine, and it is always recoverable:
/// the caller picks a different cell and tries again. Unpaired apply/undo is
/// a programming error and is made unrepresentable by the search's move
/// guard rather than detected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {:?} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}
