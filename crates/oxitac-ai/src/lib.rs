//! Move selection policies for the 3x3 board.
//!
//! Two policies implement the [`MovePolicy`] trait:
//!
//! - [`RandomMovePolicy`] - uniform choice among the empty cells
//! - [`MinimaxMovePolicy`] - perfect play via exhaustive minimax search
//!
//! Both borrow the board read-only and return the chosen coordinate; the
//! caller applies it, so exactly one net placement occurs per selection.

pub use self::{minimax::*, move_policy::*, random::*};

pub mod minimax;
pub mod move_policy;
pub mod random;

/// Returned when a policy is asked for a move on a board with no empty cells.
///
/// Hitting this in a game loop is a caller bug: terminal boards must be
/// detected before asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal move: the board has no empty cells")]
pub struct NoLegalMoveError;
