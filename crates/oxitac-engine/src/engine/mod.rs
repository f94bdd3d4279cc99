//! Session logic on top of the core board.
//!
//! - [`GameSession`] - One round of play: board, mark to move, terminal state
//! - [`MatchStats`] - Cumulative win/draw tallies across rounds
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] with the mark that moves first
//! 2. Alternate calls to [`GameSession::play`] (human input or an AI policy)
//! 3. The session flips to [`SessionState::Won`] or [`SessionState::Drawn`]
//!    as soon as the move that ends the round is applied
//! 4. Record the outcome in [`MatchStats`] and reset for the next round
//!
//! The session owns its [`Board`](crate::Board) outright; AI policies only
//! borrow it for the duration of a single move selection.

pub use self::{game_session::*, match_stats::*};

mod game_session;
mod match_stats;
