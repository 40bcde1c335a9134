//! errors returned by board construction and updates
use crate::types::Vector;
use std::error::Error;
use std::fmt;

/// Everything that can go wrong while building or driving a board.
///
/// Collisions and running off the board are not errors, they end the game and
/// show up through [`crate::types::VictorDeterminableGame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// the construction arguments don't describe a playable board
    InvalidConfig(String),
    /// a direction was not one of the four unit vectors
    InvalidMove(Vector),
    /// `update` was called after the game ended
    GameAlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(reason) => write!(f, "invalid board config: {}", reason),
            GameError::InvalidMove(v) => {
                write!(f, "move of ({}, {}) is not a unit direction", v.x, v.y)
            }
            GameError::GameAlreadyOver => write!(f, "the game is already over"),
        }
    }
}

impl Error for GameError {}
