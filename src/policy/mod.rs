//! Policies decide which way a player goes each tick.
//!
//! A policy sees the board read only and its own position, and returns the move
//! to make. `None` means "no opinion", and the board carries the player's
//! previous direction forward.
use crate::board::Board;
use crate::types::{Move, Position};

mod evaluator;
mod random;

pub use evaluator::{EvaluatorPolicy, MoveEvaluator};
pub use random::RandomPolicy;

/// Something that can pick a move for one player
pub trait Policy {
    /// choose a move for the player standing on `position`
    fn decide(&mut self, board: &Board, position: Position) -> Option<Move>;
}

impl<F> Policy for F
where
    F: FnMut(&Board, Position) -> Option<Move>,
{
    fn decide(&mut self, board: &Board, position: Position) -> Option<Move> {
        self(board, position)
    }
}

/// Never turns, the player keeps going the way it started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightPolicy;

impl Policy for StraightPolicy {
    fn decide(&mut self, _board: &Board, _position: Position) -> Option<Move> {
        None
    }
}
