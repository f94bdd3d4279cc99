use std::fmt;

use oxitac_engine::{Board, Mark};

use crate::NoLegalMoveError;

/// Chooses a legal move for a given mark on a given board.
///
/// Implementations must return a coordinate whose cell is empty at call time
/// and must leave the board observably unchanged (trial placements, if any,
/// happen on a private copy).
pub trait MovePolicy: fmt::Debug + Send + Sync {
    /// Selects a `(row, col)` move for `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMoveError`] if the board has no empty cells.
    fn select_move(&mut self, board: &Board, mark: Mark)
    -> Result<(usize, usize), NoLegalMoveError>;
}
