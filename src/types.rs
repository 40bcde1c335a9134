//! various types that are useful for working with light-cycle games
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::time::Duration;

/// number of moves a player can choose from
pub const N_MOVES: usize = 4;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

/// A cell coordinate on the board. Signed so that candidate positions which
/// fall off the board can still be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// column, 0 is the left edge
    pub x: i32,
    /// row, 0 is the bottom edge
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Offset this position by a vector.
    ///
    /// Coordinates saturate at the `i32` limits instead of wrapping. Boards are
    /// at most `i32::MAX` wide and high, so a saturated coordinate is always off
    /// the board.
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: saturate(self.x as i64 + v.x),
            y: saturate(self.y as i64 + v.y),
        }
    }

    /// the position one step away in the direction of `mv`
    pub fn step(&self, mv: Move) -> Position {
        self.add_vec(mv.to_vector())
    }
}

fn saturate(c: i64) -> i32 {
    c.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// Represents a move, one of the four axis aligned unit steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// returns all possible moves
    pub fn all() -> [Move; N_MOVES] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }
}

impl TryFrom<Vector> for Move {
    type Error = GameError;

    fn try_from(vector: Vector) -> Result<Self, Self::Error> {
        match vector {
            Vector { x: -1, y: 0 } => Ok(Self::Left),
            Vector { x: 1, y: 0 } => Ok(Self::Right),
            Vector { x: 0, y: 1 } => Ok(Self::Up),
            Vector { x: 0, y: -1 } => Ok(Self::Down),
            _ => Err(GameError::InvalidMove(vector)),
        }
    }
}

/// token to represent one of the two players
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// player 1
    One,
    /// player 2
    Two,
}

impl PlayerId {
    /// convert this player ID to a usize, `One` is 0
    pub fn as_usize(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The opponent of this player, for policies and harnesses that need to
    /// look up the other side's position or score a game from one seat.
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// both players, player one first
    pub fn all() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// Instruments to be used with simulation
pub trait SimulatorInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_simulation(&self, duration: Duration);
}

/// A game which can have it's winner determined
pub trait VictorDeterminableGame: std::fmt::Debug {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;

    /// get the winner for a given game, will return None in the case of a draw, or if the game is not over
    fn get_winner(&self) -> Option<PlayerId>;
}

/// a game for which the neighbors of a given Position can be determined
pub trait NeighborDeterminableGame {
    /// returns the in bounds neighboring positions
    fn neighbors(&self, pos: &Position) -> Vec<Position>;

    /// returns the in bounds neighboring positions, and the Move required to get to each
    fn possible_moves(&self, pos: &Position) -> Vec<(Move, Position)>;
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// a game for which the current turn is determinable
pub trait TurnDeterminableGame {
    #[allow(missing_docs)]
    fn turn(&self) -> u64;
}
