use log::debug;

use crate::core::{PlayerMark, Strategy};
use crate::error::Error;
use crate::game::board::{Board, Move};
use crate::player::min_max::terminal_score;

/// Minimax with alpha-beta pruning.
///
/// Every candidate at the root is scored with a full window, so the scores it compares are exact
/// and it picks the same square as [`crate::player::MinMaxAi`]. Only the work below the root is pruned.
pub struct AlphaBetaAi {
    /// A performance counter. If we prune well, this number is small
    n_leafs_evaluated: usize,
}

impl Default for AlphaBetaAi {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBetaAi {
    pub fn new() -> Self {
        AlphaBetaAi {
            n_leafs_evaluated: 0,
        }
    }

    pub fn n_leafs_evaluated(&self) -> usize {
        self.n_leafs_evaluated
    }

    /// compute the score of a node by use of alpha-beta with pruning
    /// Assumes `my_marker` wants to maximize the score, and the opponent makes moves to minimize it
    fn alphabeta(
        &mut self,
        node: &mut Board,
        a: i32,
        b: i32,
        my_move: bool,
        my_marker: PlayerMark,
    ) -> Result<i32, Error> {
        if let Some(s) = terminal_score(node, my_marker) {
            self.n_leafs_evaluated += 1;
            return Ok(s);
        }
        let mut a = a;
        let mut b = b;
        if my_move {
            // In this branch, the AI tries to find a move for itself that would maximize the score
            let mut value = i32::MIN;
            for at in node.empty_cells() {
                let mut child = node.trial(at, my_marker)?;
                value = value.max(self.alphabeta(&mut child, a, b, false, my_marker)?);
                a = a.max(value);
                if value >= b {
                    break;
                }
            }
            Ok(value)
        } else {
            // In this branch, the AI tries to find a move for the other player that would minimize the score
            let mut value = i32::MAX;
            for at in node.empty_cells() {
                let mut child = node.trial(at, my_marker.other())?;
                value = value.min(self.alphabeta(&mut child, a, b, true, my_marker)?);
                b = b.min(value);
                if value <= a {
                    break;
                }
            }
            Ok(value)
        }
    }
}

impl Strategy for AlphaBetaAi {
    fn choose_move(&mut self, b: &mut Board, mark: PlayerMark) -> Result<Move, Error> {
        let mut best: Option<(i32, Move)> = None;
        for at in b.empty_cells() {
            let mut child = b.trial(at, mark)?;
            let score = self.alphabeta(&mut child, i32::MIN, i32::MAX, false, mark)?;
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, at));
            }
        }
        best.map(|(_, at)| at).ok_or(Error::NoLegalMove)
    }
}

impl Drop for AlphaBetaAi {
    fn drop(&mut self) {
        debug!("AlphaBetaAi evaluated {} leaf nodes", self.n_leafs_evaluated);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::player::MinMaxAi;

    #[test]
    fn prunes_the_opening_search() {
        let mut plain = MinMaxAi::new();
        let mut pruned = AlphaBetaAi::new();
        let mut b = Board::new();
        assert_eq!(
            plain.choose_move(&mut b, PlayerMark::A).unwrap(),
            pruned.choose_move(&mut b, PlayerMark::A).unwrap()
        );
        assert!(pruned.n_leafs_evaluated() < plain.n_leafs_evaluated());
        assert_eq!(b, Board::new());
    }
}
