use crate::core::mark::Mark;

use super::game_session::SessionState;

/// Cumulative tallies across repeated rounds in one process run.
///
/// Wins are attributed to the mark that actually completed a line,
/// regardless of whether a human or the AI was playing it.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl MatchStats {
    /// Creates a tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    /// Records the outcome of a finished round.
    ///
    /// An in-progress state is ignored; finished rounds are the caller's
    /// obligation here.
    pub const fn record_round(&mut self, state: SessionState) {
        match state {
            SessionState::Won(Mark::X) => self.x_wins += 1,
            SessionState::Won(Mark::O) => self.o_wins += 1,
            SessionState::Drawn => self.draws += 1,
            SessionState::InProgress => {}
        }
    }

    /// Returns the number of rounds won by `mark`.
    #[must_use]
    pub const fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Returns the number of drawn rounds.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the total number of finished rounds.
    #[must_use]
    pub const fn total_rounds(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}
