//! One ply of lookahead: win now if possible, otherwise stop the opponent from winning next turn.
//! It does not see forks coming.

use rand::rngs::StdRng;

use crate::core::{Outcome, PlayerMark, Strategy};
use crate::error::Error;
use crate::game::board::{Board, Move};
use crate::game::outcome::evaluate;
use crate::player::RandomAi;

pub struct HeuristicAi<R> {
    fallback: RandomAi<R>,
}

/// The first empty square (row-major) where `mark` would complete a line
pub fn completing_move(b: &mut Board, mark: PlayerMark) -> Result<Option<Move>, Error> {
    for at in b.empty_cells() {
        let trial = b.trial(at, mark)?;
        if evaluate(&trial) == Outcome::Win(mark) {
            return Ok(Some(at));
        }
    }
    Ok(None)
}

impl<R: rand::Rng> HeuristicAi<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            fallback: RandomAi::with_rng(rng),
        }
    }
}

impl HeuristicAi<StdRng> {
    pub fn new(seed: u64) -> Self {
        Self {
            fallback: RandomAi::new(seed),
        }
    }
}

impl<R: rand::Rng> Strategy for HeuristicAi<R> {
    fn choose_move(&mut self, b: &mut Board, mark: PlayerMark) -> Result<Move, Error> {
        if let Some(at) = completing_move(b, mark)? {
            return Ok(at);
        }
        if let Some(at) = completing_move(b, mark.other())? {
            return Ok(at);
        }
        self.fallback.pick(b)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn sq(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn takes_the_win() {
        let mut b = Board::from_str("AA_ BB_ ___").unwrap();
        let mut ai = HeuristicAi::new(1);
        assert_eq!(ai.choose_move(&mut b, PlayerMark::A).unwrap(), sq(0, 2));
    }

    #[test]
    fn winning_beats_blocking() {
        // B could block A at (0, 2), but finishing its own row wins outright
        let mut b = Board::from_str("AA_ BB_ A__").unwrap();
        let mut ai = HeuristicAi::new(1);
        assert_eq!(ai.choose_move(&mut b, PlayerMark::B).unwrap(), sq(1, 2));
    }

    #[test]
    fn blocks_the_threat() {
        let mut b = Board::from_str("BB_ _A_ __A").unwrap();
        let mut ai = HeuristicAi::new(1);
        assert_eq!(ai.choose_move(&mut b, PlayerMark::A).unwrap(), sq(0, 2));
    }

    #[test]
    fn leaves_the_board_as_it_found_it() {
        let mut b = Board::from_str("A__ _B_ ___").unwrap();
        let before = b;
        let mut ai = HeuristicAi::new(3);
        let at = ai.choose_move(&mut b, PlayerMark::A).unwrap();
        assert_eq!(b, before);
        assert!(b.is_empty(at));
    }

    #[test]
    fn full_board_has_no_legal_move() {
        let mut b = Board::from_str("ABA ABB BAA").unwrap();
        assert_eq!(
            HeuristicAi::new(0).choose_move(&mut b, PlayerMark::A),
            Err(Error::NoLegalMove)
        );
    }
}
