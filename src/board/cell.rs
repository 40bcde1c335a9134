use serde::{Deserialize, Serialize};

use crate::types::PlayerId;

/// The state of a single grid cell.
///
/// A cell only ever moves forward: `Empty` to `Occupied*` to `Trail*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// nobody has been here, can move here without issue
    Empty,
    /// where player 1 is now
    OccupiedP1,
    /// where player 2 is now
    OccupiedP2,
    /// visited by player 1
    TrailP1,
    /// visited by player 2
    TrailP2,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// the cell holding this player's current position
    pub fn occupied_by(player: PlayerId) -> Cell {
        match player {
            PlayerId::One => Cell::OccupiedP1,
            PlayerId::Two => Cell::OccupiedP2,
        }
    }

    /// the cell this player leaves behind
    pub fn trail_of(player: PlayerId) -> Cell {
        match player {
            PlayerId::One => Cell::TrailP1,
            PlayerId::Two => Cell::TrailP2,
        }
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// which player, if any, has touched this cell
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::OccupiedP1 | Cell::TrailP1 => Some(PlayerId::One),
            Cell::OccupiedP2 | Cell::TrailP2 => Some(PlayerId::Two),
        }
    }

    /// numeric code used by the feature encoding, 0 through 4 in declaration order
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::OccupiedP1 => 1,
            Cell::OccupiedP2 => 2,
            Cell::TrailP1 => 3,
            Cell::TrailP2 => 4,
        }
    }

    pub(crate) fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::OccupiedP1 => '1',
            Cell::OccupiedP2 => '2',
            Cell::TrailP1 => 'a',
            Cell::TrailP2 => 'b',
        }
    }
}
