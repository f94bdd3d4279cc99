use oxitac_engine::{Board, Mark};

use crate::{NoLegalMoveError, move_policy::MovePolicy};

// Terminal score magnitude before the depth adjustment.
const WIN_SCORE: i32 = 10;

/// Exhaustive backward-induction score of `board` with `this` to move.
///
/// Wins for `this` score `WIN_SCORE - depth` and wins for the rival score
/// `depth - WIN_SCORE`, so among equally winning lines the search prefers
/// the fastest win and among lost lines the longest defense. Draws score 0.
///
/// Plain recursive depth-first search with trial placements retracted on the
/// way out. No pruning: the tree is bounded by 9 plies, which is small
/// enough that alpha-beta would only obscure the contract. This is not a
/// general adversarial-search building block.
fn minimax(board: &mut Board, depth: i32, maximizing: bool, this: Mark, rival: Mark) -> i32 {
    if board.has_won(this) {
        return WIN_SCORE - depth;
    }
    if board.has_won(rival) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = i32::MIN;
        for (row, col) in board.empty_cells() {
            board
                .place(row, col, this)
                .expect("cell came from empty_cells()");
            best = best.max(minimax(board, depth + 1, false, this, rival));
            board.clear(row, col);
        }
        best
    } else {
        let mut best = i32::MAX;
        for (row, col) in board.empty_cells() {
            board
                .place(row, col, rival)
                .expect("cell came from empty_cells()");
            best = best.min(minimax(board, depth + 1, true, this, rival));
            board.clear(row, col);
        }
        best
    }
}

/// Returns the perfect-play value of `board` with `this` to move.
///
/// Positive means `this` forces a win, negative means the rival does, zero
/// means best play draws.
#[must_use]
pub fn evaluate_position(board: &Board, this: Mark) -> i32 {
    let mut scratch = board.clone();
    minimax(&mut scratch, 0, true, this, this.opponent())
}

/// Optimal move selection via exhaustive minimax search.
///
/// Deterministic: the same board and marks always yield the same move.
/// Candidate cells are scanned in row-major order and a candidate replaces
/// the incumbent only with a strictly greater score, so the first cell in
/// scan order wins ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxMovePolicy;

impl MovePolicy for MinimaxMovePolicy {
    fn select_move(
        &mut self,
        board: &Board,
        mark: Mark,
    ) -> Result<(usize, usize), NoLegalMoveError> {
        let rival = mark.opponent();
        let mut scratch = board.clone();
        let mut best: Option<((usize, usize), i32)> = None;
        for (row, col) in scratch.empty_cells() {
            scratch
                .place(row, col, mark)
                .expect("cell came from empty_cells()");
            // The next ply belongs to the rival, hence minimizing
            let score = minimax(&mut scratch, 0, false, mark, rival);
            scratch.clear(row, col);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some(((row, col), score));
            }
        }
        best.map(|(cell, _)| cell).ok_or(NoLegalMoveError)
    }
}
