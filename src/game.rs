use log::debug;

use crate::core::{Outcome, PlayerMark, Strategy};
use crate::error::Error;

pub mod board;
pub mod outcome;

use board::{Board, Move};
use outcome::evaluate;

/// The holder of a running game: the board and whose turn it is.
/// A moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: PlayerMark,
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Board::new(), PlayerMark::A)
    }

    /// Continue from a given position with `to_move` playing next
    pub fn from_position(board: Board, to_move: PlayerMark) -> Self {
        Self {
            board,
            to_move,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> PlayerMark {
        self.to_move
    }

    /// The moves made since this game was created
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Place the mark of the player to move, then hand the turn over
    pub fn play(&mut self, at: Move) -> Result<Outcome, Error> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(Error::GameOver(outcome));
        }
        self.board.set(at, self.to_move)?;
        debug!("Player {} played {}", self.to_move, at);
        debug!("\n{}", self.board);
        self.moves.push(at);
        self.to_move = self.to_move.other();
        Ok(self.outcome())
    }

    /// Ask a strategy for a move for the player to move, and play it
    pub fn play_strategy(&mut self, strategy: &mut dyn Strategy) -> Result<Move, Error> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(Error::GameOver(outcome));
        }
        let at = strategy.choose_move(&mut self.board, self.to_move)?;
        self.play(at)?;
        Ok(at)
    }
}

/// Play a full game from the empty board, `player_a` moving first
pub fn run_game(
    player_a: &mut dyn Strategy,
    player_b: &mut dyn Strategy,
) -> Result<Outcome, Error> {
    run_game_from(Game::new(), player_a, player_b).map(|g| g.outcome())
}

/// Play on from a position until the game ends. Returns the finished game.
pub fn run_game_from(
    mut game: Game,
    player_a: &mut dyn Strategy,
    player_b: &mut dyn Strategy,
) -> Result<Game, Error> {
    while !game.outcome().is_terminal() {
        match game.to_move() {
            PlayerMark::A => game.play_strategy(player_a)?,
            PlayerMark::B => game.play_strategy(player_b)?,
        };
    }
    debug!("Game ended with {}", game.outcome());
    Ok(game)
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn turns_alternate() {
        let mut g = Game::new();
        g.play(Move::new(1, 1).unwrap()).unwrap();
        assert_eq!(g.to_move(), PlayerMark::B);
        g.play(Move::new(0, 0).unwrap()).unwrap();
        assert_eq!(g.board().get(Move::new(0, 0).unwrap()), Some(PlayerMark::B));
        assert_eq!(g.to_move(), PlayerMark::A);
        assert_eq!(g.moves().len(), 2);
    }

    #[test]
    fn occupied_square_keeps_the_turn() {
        let mut g = Game::new();
        let center = Move::new(1, 1).unwrap();
        g.play(center).unwrap();
        assert_eq!(g.play(center), Err(Error::IllegalMove { at: center }));
        assert_eq!(g.to_move(), PlayerMark::B);
    }

    #[test]
    fn no_moves_after_the_game_is_over() {
        let b = Board::from_str("AAA BB_ ___").unwrap();
        let mut g = Game::from_position(b, PlayerMark::B);
        assert_eq!(
            g.play(Move::new(1, 2).unwrap()),
            Err(Error::GameOver(Outcome::Win(PlayerMark::A)))
        );
    }
}
