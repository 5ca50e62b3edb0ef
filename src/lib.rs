//! A game engine for noughts and crosses on a 3×3 board, with three computer opponents:
//! a random mover, a win-or-block heuristic and a perfect minimax search.
//!
//! The crate does not draw anything or read clicks. Whoever does that holds a
//! [`game::board::Board`], asks a [`core::Strategy`] for a move when it is the computer's turn,
//! and checks [`game::outcome::evaluate`] to see when the game is over.

pub mod core;
pub mod error;
pub mod game;
pub mod logging;
pub mod player;

pub use crate::core::{Cell, Outcome, PlayerMark, Strategy, StrategyKind};
pub use crate::error::Error;
pub use crate::game::board::{Board, Move, TrialMove};
pub use crate::game::outcome::evaluate;
