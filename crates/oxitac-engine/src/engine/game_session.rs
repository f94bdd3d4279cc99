use crate::{
    MoveError,
    core::{board::Board, mark::Mark},
};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    InProgress,
    Won(Mark),
    Drawn,
}

/// A single round of tic-tac-toe: the board plus whose turn it is.
///
/// Replaces the usual global board/turn variables with an explicit value
/// owned by the game loop. Turn alternation is handled here, so callers
/// never place two moves for the same mark in a row.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Mark,
    state: SessionState,
}

impl GameSession {
    /// Starts a round with `first` to move on an empty board.
    #[must_use]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            state: SessionState::InProgress,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Clears the board and starts a fresh round with `first` to move.
    pub fn reset(&mut self, first: Mark) {
        self.board.reset();
        self.turn = first;
        self.state = SessionState::InProgress;
    }

    /// Applies a move for the mark whose turn it is.
    ///
    /// On success the round state is re-evaluated (win for the mover, then
    /// draw) and, if the round continues, the turn passes to the other mark.
    /// A rejected move leaves board, turn, and state unchanged.
    pub fn play(&mut self, row: usize, col: usize) -> Result<SessionState, MoveError> {
        if !self.state.is_in_progress() {
            return Err(MoveError::RoundOver);
        }
        self.board.place(row, col, self.turn)?;
        if self.board.has_won(self.turn) {
            self.state = SessionState::Won(self.turn);
        } else if self.board.is_full() {
            self.state = SessionState::Drawn;
        } else {
            self.turn = self.turn.opponent();
        }
        Ok(self.state)
    }
}
