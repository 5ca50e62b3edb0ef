use crate::core::{Outcome, PlayerMark};
use crate::game::board::{Board, Move, N_SQUARES, SIDE};

const fn sq(row: usize, col: usize) -> Move {
    Move::new_unchecked(row, col)
}

/// The eight lines of three.
/// Rows top to bottom, then columns left to right, then the two diagonals
/// (first the one that points to southeast, then the one to northeast).
const LINES: [[Move; SIDE]; 8] = [
    [sq(0, 0), sq(0, 1), sq(0, 2)],
    [sq(1, 0), sq(1, 1), sq(1, 2)],
    [sq(2, 0), sq(2, 1), sq(2, 2)],
    [sq(0, 0), sq(1, 0), sq(2, 0)],
    [sq(0, 1), sq(1, 1), sq(2, 1)],
    [sq(0, 2), sq(1, 2), sq(2, 2)],
    [sq(0, 0), sq(1, 1), sq(2, 2)],
    [sq(0, 2), sq(1, 1), sq(2, 0)],
];

fn line_owner(b: &Board, line: &[Move; SIDE]) -> Option<PlayerMark> {
    let [first, second, third] = *line;
    match b.get(first) {
        Some(mark) if b.get(second) == Some(mark) && b.get(third) == Some(mark) => Some(mark),
        _ => None,
    }
}

/// The first completed line, if any, and who owns it.
///
/// A legally reached board has at most one winner, so the order lines are checked in does not matter.
pub fn winning_line(b: &Board) -> Option<(PlayerMark, [Move; SIDE])> {
    LINES
        .iter()
        .find_map(|line| line_owner(b, line).map(|mark| (mark, *line)))
}

pub fn winner(b: &Board) -> Option<PlayerMark> {
    winning_line(b).map(|(mark, _)| mark)
}

pub fn evaluate(b: &Board) -> Outcome {
    if let Some(p) = winner(b) {
        Outcome::Win(p)
    } else if b.occupied_count() == N_SQUARES {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
