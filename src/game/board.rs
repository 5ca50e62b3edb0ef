use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use itertools::{iproduct, Itertools as _};
use serde::{Deserialize, Serialize};

use crate::core::{Cell, PlayerMark};
use crate::error::Error;

/// Side length of the board
pub const SIDE: usize = 3;
/// Number of squares on the board
pub const N_SQUARES: usize = SIDE * SIDE;

/// Represents a coordinate on the board
///
///  (0,0) (0,1) (0,2)
///  (1,0) (1,1) (1,2)
///  (2,0) (2,1) (2,2)
///
/// invariant: row and col are both in 0..3
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Self, Error> {
        if row < SIDE && col < SIDE {
            Ok(Self { row, col })
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    pub(crate) const fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index, 0 is the top left and 8 the bottom right
    pub fn from_index(idx: usize) -> Result<Self, Error> {
        Self::new(idx / SIDE, idx % SIDE)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row * SIDE + self.col
    }

    /// Every square, in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        iproduct!(0..SIDE, 0..SIDE).map(|(row, col)| Move { row, col })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The grid, stored row-major.
///
/// The board does not know whose turn it is. Alternating turns is up to whoever drives the game.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Board([[Cell; SIDE]; SIDE]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, at: Move) -> Cell {
        self.0[at.row][at.col]
    }

    pub fn is_empty(&self, at: Move) -> bool {
        self.get(at).is_none()
    }

    /// Place a marker. Fails, leaving the board as it was, if the square is taken.
    pub fn set(&mut self, at: Move, marker: PlayerMark) -> Result<(), Error> {
        if !self.is_empty(at) {
            return Err(Error::IllegalMove { at });
        }
        self.0[at.row][at.col] = Some(marker);
        Ok(())
    }

    pub fn clear(&mut self, at: Move) {
        self.0[at.row][at.col] = None;
    }

    /// The empty squares in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::all().filter(|&at| self.is_empty(at)).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.0.iter().flatten().filter(|q| q.is_some()).count()
    }

    /// Place a marker for as long as the returned guard lives.
    ///
    /// The guard derefs to the board, so the hypothetical position can be inspected and
    /// searched further. The square is emptied again when the guard is dropped.
    pub fn trial(&mut self, at: Move, marker: PlayerMark) -> Result<TrialMove<'_>, Error> {
        self.set(at, marker)?;
        Ok(TrialMove { board: self, at })
    }
}

/// A hypothetical move that is taken back on drop
pub struct TrialMove<'a> {
    board: &'a mut Board,
    at: Move,
}

impl TrialMove<'_> {
    pub fn at(&self) -> Move {
        self.at
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.at);
    }
}

fn parse_cell(token: &str, position: usize) -> Result<Cell, Error> {
    match token {
        "_" | "." | "-" => Ok(None),
        "A" | "a" | "X" | "x" => Ok(Some(PlayerMark::A)),
        "B" | "b" | "O" | "o" => Ok(Some(PlayerMark::B)),
        _ => Err(Error::InvalidCellToken {
            token: token.to_string(),
            position,
        }),
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Reads nine cells, row-major. Cells are separated by commas or whitespace, e.g.
    /// `A,_,B _,A,_ _,_,B`. Cells may also be run together, as in `A_B _A_ __B` or `A_B_A___B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<String> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tokens.iter().any(|t| t.chars().count() > 1) {
            tokens = tokens.concat().chars().map(String::from).collect();
        }
        if tokens.len() != N_SQUARES {
            return Err(Error::InvalidCellCount {
                expected: N_SQUARES,
                got: tokens.len(),
            });
        }
        let mut b = Self::new();
        for (position, (token, at)) in tokens.iter().zip(Move::all()).enumerate() {
            b.0[at.row][at.col] = parse_cell(token, position)?;
        }
        Ok(b)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |m: &Cell| match m {
            None => '_',
            Some(PlayerMark::A) => 'A',
            Some(PlayerMark::B) => 'B',
        };
        for row in self.0.iter() {
            writeln!(f, "{}", row.iter().map(m).join(" "))?;
        }
        Ok(())
    }
}
