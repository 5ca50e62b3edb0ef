//! The core abstractions for this application
//!

use std::fmt::Display;
use std::str::FromStr;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::board::{Board, Move};
use crate::player::{AlphaBetaAi, HeuristicAi, MinMaxAi, RandomAi};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerMark {
    A,
    B,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl FromStr for PlayerMark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" | "X" => Ok(Self::A),
            "B" | "O" => Ok(Self::B),
            _ => Err(Error::InvalidMarker(s.to_string())),
        }
    }
}

/// The content of a single square. `None` is an empty square.
pub type Cell = Option<PlayerMark>;

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Draw,
    Win(PlayerMark),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::Draw => write!(f, "draw"),
            Self::Win(mark) => write!(f, "{mark} wins"),
        }
    }
}

/// A Strategy is something that can pick a square for a player.
pub trait Strategy {
    /// Look at the board and pick a move for `mark`.
    ///
    /// The board is borrowed mutably so that search can try moves in place.
    /// It is always handed back in the state it was received in.
    fn choose_move(&mut self, b: &mut Board, mark: PlayerMark) -> Result<Move, Error>;
}

/// The difficulty tiers a player can pick from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Plays any open square
    Random,
    /// Wins if it can, blocks if it must, otherwise plays randomly
    Heuristic,
    /// Full game tree search. Never loses.
    Optimal,
}

impl StrategyKind {
    /// Build a fresh strategy of this kind. The seed is only used by the kinds that roll dice.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Self::Random => Box::new(RandomAi::new(seed)),
            Self::Heuristic => Box::new(HeuristicAi::new(seed)),
            Self::Optimal => Box::new(MinMaxAi::new()),
        }
    }

    /// Same as [`StrategyKind::build`], but the optimal tier prunes its search.
    pub fn build_pruned(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Self::Optimal => Box::new(AlphaBetaAi::new()),
            other => other.build(seed),
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Heuristic => write!(f, "heuristic"),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "goldfish" => Ok(Self::Random),
            "heuristic" | "medium" | "average" => Ok(Self::Heuristic),
            "optimal" | "impossible" | "minimax" => Ok(Self::Optimal),
            _ => Err(Error::InvalidStrategyName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use enum_iterator::all;

    use super::*;

    #[test]
    fn marks_parse_with_aliases() {
        assert_eq!("a".parse::<PlayerMark>().unwrap(), PlayerMark::A);
        assert_eq!("X".parse::<PlayerMark>().unwrap(), PlayerMark::A);
        assert_eq!(" o ".parse::<PlayerMark>().unwrap(), PlayerMark::B);
        assert!(matches!(
            "C".parse::<PlayerMark>(),
            Err(Error::InvalidMarker(s)) if s == "C"
        ));
    }

    #[test]
    fn strategy_names_round_trip_through_display() {
        for kind in all::<StrategyKind>() {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
        assert_eq!("Impossible".parse::<StrategyKind>().unwrap(), StrategyKind::Optimal);
        assert_eq!("goldfish".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert!(matches!(
            "grandmaster".parse::<StrategyKind>(),
            Err(Error::InvalidStrategyName(_))
        ));
    }

    #[test]
    fn other_is_an_involution() {
        assert_eq!(PlayerMark::A.other(), PlayerMark::B);
        assert_eq!(PlayerMark::A.other().other(), PlayerMark::A);
    }
}
