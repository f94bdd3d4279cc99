use std::fmt;

use oxitac_engine::{Board, Mark};
use rand::{Rng, SeedableRng as _, prelude::StdRng, seq::IndexedRandom as _};

use crate::{NoLegalMoveError, move_policy::MovePolicy};

/// Uniformly random legal moves.
///
/// Every empty cell is equally likely. The default RNG is seeded from the
/// OS; tests inject a seeded generator through [`RandomMovePolicy::from_rng`].
#[derive(Debug)]
pub struct RandomMovePolicy<R = StdRng> {
    rng: R,
}

impl RandomMovePolicy {
    /// Creates a policy whose RNG is seeded from the OS's random source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomMovePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMovePolicy<R> {
    /// Creates a policy driven by the given RNG.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> MovePolicy for RandomMovePolicy<R>
where
    R: Rng + fmt::Debug + Send + Sync,
{
    fn select_move(
        &mut self,
        board: &Board,
        _mark: Mark,
    ) -> Result<(usize, usize), NoLegalMoveError> {
        board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(NoLegalMoveError)
    }
}
