use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::SeedableRng;

use crate::core::{PlayerMark, Strategy};
use crate::error::Error;
use crate::game::board::{Board, Move};

/// Plays any empty square, each with the same probability
pub struct RandomAi<R> {
    rng: R,
}

impl<R: rand::Rng> RandomAi<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a move without needing a whole strategy. The mark does not matter to a goldfish.
    pub(crate) fn pick(&mut self, b: &Board) -> Result<Move, Error> {
        b.empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMove)
    }
}

impl<R: rand::Rng> Strategy for RandomAi<R> {
    fn choose_move(&mut self, b: &mut Board, _mark: PlayerMark) -> Result<Move, Error> {
        self.pick(b)
    }
}

impl RandomAi<StdRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}
