use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::{Move, Position, Vector};

use super::Board;

/// Plain construction parameters for a [`Board`].
///
/// Directions are raw vectors so a config read from JSON can carry a bad
/// direction, which `build` reports as [`GameError::InvalidConfig`].
/// ```
/// # use lightcycle_game_types::board::BoardConfig;
/// let config = BoardConfig::from_json_str(
///     r#"{"width":5,"height":5,"p1_start":{"x":1,"y":2},"p2_start":{"x":3,"y":2},
///        "p1_direction":{"x":1,"y":0},"p2_direction":{"x":-1,"y":0}}"#,
/// ).unwrap();
/// let board = config.build().unwrap();
/// assert_eq!(board.width(), 5);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
    #[allow(missing_docs)]
    pub p1_start: Position,
    #[allow(missing_docs)]
    pub p2_start: Position,
    #[allow(missing_docs)]
    pub p1_direction: Vector,
    #[allow(missing_docs)]
    pub p2_direction: Vector,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 20,
            height: 20,
            p1_start: Position::new(3, 4),
            p2_start: Position::new(17, 4),
            p1_direction: Vector { x: 1, y: 0 },
            p2_direction: Vector { x: 1, y: 0 },
        }
    }
}

impl BoardConfig {
    /// parse a config from its JSON form
    pub fn from_json_str(s: &str) -> Result<Self, GameError> {
        serde_json::from_str(s).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// build the board this config describes
    pub fn build(&self) -> Result<Board, GameError> {
        let p1_direction = direction(self.p1_direction, "player 1")?;
        let p2_direction = direction(self.p2_direction, "player 2")?;
        Board::new(
            self.width,
            self.height,
            self.p1_start,
            self.p2_start,
            p1_direction,
            p2_direction,
        )
    }
}

fn direction(v: Vector, who: &str) -> Result<Move, GameError> {
    Move::try_from(v).map_err(|_| {
        GameError::InvalidConfig(format!(
            "{} direction ({}, {}) is not a unit vector",
            who, v.x, v.y
        ))
    })
}
