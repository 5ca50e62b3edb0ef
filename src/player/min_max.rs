use log::debug;

use crate::core::{Outcome, PlayerMark, Strategy};
use crate::error::Error;
use crate::game::board::{Board, Move};
use crate::game::outcome::evaluate;

/// Score of a finished game from the point of view of `my_marker`.
/// `None` if the game is still going.
pub(crate) fn terminal_score(b: &Board, my_marker: PlayerMark) -> Option<i32> {
    match evaluate(b) {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(0),
        Outcome::Win(mark) if mark == my_marker => Some(1),
        Outcome::Win(_) => Some(-1),
    }
}

/// Exhaustive minimax. Plays perfectly, which on this board means it never loses.
pub struct MinMaxAi {
    /// A performance counter: how many finished games the search has looked at
    n_leafs_evaluated: usize,
}

impl Default for MinMaxAi {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxAi {
    pub fn new() -> Self {
        Self {
            n_leafs_evaluated: 0,
        }
    }

    pub fn n_leafs_evaluated(&self) -> usize {
        self.n_leafs_evaluated
    }

    /// compute the score of a node by use of minimax
    /// Assumes `my_marker` wants to maximize the score, and the opponent makes moves to minimize it
    pub fn minimax(
        &mut self,
        node: &mut Board,
        my_move: bool,
        my_marker: PlayerMark,
    ) -> Result<i32, Error> {
        if let Some(s) = terminal_score(node, my_marker) {
            self.n_leafs_evaluated += 1;
            return Ok(s);
        }
        let mover = if my_move { my_marker } else { my_marker.other() };
        let mut value = if my_move { i32::MIN } else { i32::MAX };
        for at in node.empty_cells() {
            let mut child = node.trial(at, mover)?;
            let newval = self.minimax(&mut child, !my_move, my_marker)?;
            value = if my_move {
                value.max(newval)
            } else {
                value.min(newval)
            };
        }
        Ok(value)
    }
}

impl Strategy for MinMaxAi {
    fn choose_move(&mut self, b: &mut Board, mark: PlayerMark) -> Result<Move, Error> {
        let mut best: Option<(i32, Move)> = None;
        for at in b.empty_cells() {
            let mut child = b.trial(at, mark)?;
            let score = self.minimax(&mut child, false, mark)?;
            // strictly better only, so ties go to the first square in row-major order
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, at));
            }
        }
        best.map(|(_, at)| at).ok_or(Error::NoLegalMove)
    }
}

impl Drop for MinMaxAi {
    fn drop(&mut self) {
        debug!("MinMaxAi evaluated {} leaf nodes", self.n_leafs_evaluated);
    }
}
