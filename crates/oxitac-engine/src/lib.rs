pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reasons a placement can be rejected by [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    #[display("coordinate ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MoveError {
    #[from]
    #[display("{_0}")]
    Place(PlaceError),
    #[display("the round is already over")]
    RoundOver,
}
