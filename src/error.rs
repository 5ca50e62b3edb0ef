//! Error types for the game engine

use thiserror::Error;

use crate::core::Outcome;
use crate::game::board::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: square {at} is already occupied")]
    IllegalMove { at: Move },

    #[error("no legal move: the board has no empty squares")]
    NoLegalMove,

    #[error("the game is already over ({0})")]
    GameOver(Outcome),

    #[error("unknown strategy '{0}' (expected random, heuristic or optimal)")]
    InvalidStrategyName(String),

    #[error("unknown marker '{0}' (expected A or B)")]
    InvalidMarker(String),

    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("expected {expected} cells, got {got}")]
    InvalidCellCount { expected: usize, got: usize },

    #[error("invalid cell '{token}' at position {position} (expected _, A or B)")]
    InvalidCellToken { token: String, position: usize },
}
