//! The light-cycle board: grid, both players, and the simultaneous update rule.
//!
//! Each tick both players pick a direction. Both candidate cells are computed from
//! the positions before the tick, then the board is mutated:
//!
//! 1. if both candidates are the same cell the players collide head on and the
//!    game is a draw, nothing else on the grid changes
//! 2. otherwise both current cells become trail
//! 3. each player moves iff its candidate is on the board and empty *after* step 2
//!
//! ```
//! use lightcycle_game_types::board::Board;
//! use lightcycle_game_types::types::{Move, Position, VictorDeterminableGame};
//!
//! let mut board = Board::new(
//!     5,
//!     5,
//!     Position::new(1, 2),
//!     Position::new(3, 2),
//!     Move::Right,
//!     Move::Left,
//! )
//! .unwrap();
//! assert_eq!(board.update(None, None), Ok(false));
//! assert!(board.is_over());
//! assert_eq!(board.get_winner(), None);
//! ```
use std::convert::TryFrom;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::GameError;
use crate::types::{
    Move, NeighborDeterminableGame, PlayerId, Position, SizeDeterminableGame,
    TurnDeterminableGame, Vector, VictorDeterminableGame,
};

mod cell;
mod config;

pub use cell::Cell;
pub use config::BoardConfig;

/// Grid plus the state of both players.
///
/// Once the game is over the board never changes again, `update` returns
/// [`GameError::GameAlreadyOver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    width: u32,
    height: u32,
    /// row major, `y * width + x`
    cells: Vec<Cell>,
    positions: [Position; 2],
    directions: [Move; 2],
    game_over: bool,
    winner: Option<PlayerId>,
    turn: u64,
}

impl Board {
    /// Creates a new board with both players on their start cells.
    ///
    /// Fails with [`GameError::InvalidConfig`] if the start cells are the same,
    /// either one is off the board, or a side is longer than `i32::MAX`.
    pub fn new(
        width: u32,
        height: u32,
        p1: Position,
        p2: Position,
        p1_direction: Move,
        p2_direction: Move,
    ) -> Result<Board, GameError> {
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GameError::InvalidConfig(format!(
                "{}x{} board is too large",
                width, height
            )));
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                GameError::InvalidConfig(format!("{}x{} board is too large", width, height))
            })?;
        if p1 == p2 {
            return Err(GameError::InvalidConfig(format!(
                "both players start at ({}, {})",
                p1.x, p1.y
            )));
        }

        let mut board = Board {
            width,
            height,
            cells: vec![Cell::Empty; size],
            positions: [p1, p2],
            directions: [p1_direction, p2_direction],
            game_over: false,
            winner: None,
            turn: 0,
        };
        for player in PlayerId::all() {
            let start = board.positions[player.as_usize()];
            if !board.set_cell(start, Cell::occupied_by(player)) {
                return Err(GameError::InvalidConfig(format!(
                    "{} start ({}, {}) is off the {}x{} board",
                    player, start.x, start.y, width, height
                )));
            }
        }

        Ok(board)
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// all cells in row major order, `y * width + x`
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// the cell at a position, `None` when off the board
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// current position of a player
    pub fn position(&self, player: PlayerId) -> Position {
        self.positions[player.as_usize()]
    }

    /// the direction this player will carry forward if it supplies none
    pub fn direction(&self, player: PlayerId) -> Move {
        self.directions[player.as_usize()]
    }

    #[allow(missing_docs)]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as i64) < self.width as i64
            && (pos.y as i64) < self.height as i64
    }

    /// Returns true if a player could move here. Doesn't account for the other
    /// player's move this tick.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.cell(pos).map_or(false, |c| c.is_empty())
    }

    /// moves which would land this player on an empty cell, in `Move::all()` order
    pub fn valid_moves(&self, player: PlayerId) -> Vec<Move> {
        let from = self.position(player);
        Move::all()
            .iter()
            .copied()
            .filter(|mv| self.is_valid_move(from.step(*mv)))
            .collect_vec()
    }

    /// Applies one tick. `None` means "keep going the way you were going".
    ///
    /// Returns whether the game continues. Collisions are not errors, they end the
    /// game and decide the winner.
    #[instrument(level = "trace", skip_all)]
    pub fn update(&mut self, p1: Option<Move>, p2: Option<Move>) -> Result<bool, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }

        let moves = [
            p1.unwrap_or(self.directions[0]),
            p2.unwrap_or(self.directions[1]),
        ];
        let next = [
            self.positions[0].step(moves[0]),
            self.positions[1].step(moves[1]),
        ];
        self.turn += 1;

        // head on, both die and the grid is left as it was
        if next[0] == next[1] {
            self.finish(None);
            return Ok(false);
        }

        for player in PlayerId::all() {
            let old = self.positions[player.as_usize()];
            self.set_cell(old, Cell::trail_of(player));
        }

        let mut dead = [false; 2];
        for player in PlayerId::all() {
            let i = player.as_usize();
            if self.is_valid_move(next[i]) {
                self.set_cell(next[i], Cell::occupied_by(player));
                self.positions[i] = next[i];
                self.directions[i] = moves[i];
            } else {
                dead[i] = true;
            }
        }

        match dead {
            [false, false] => return Ok(true),
            [true, true] => self.finish(None),
            [true, false] => self.finish(Some(PlayerId::Two)),
            [false, true] => self.finish(Some(PlayerId::One)),
        }
        Ok(false)
    }

    /// Like [`Board::update`] but with raw direction vectors.
    ///
    /// Anything other than the four unit vectors is rejected with
    /// [`GameError::InvalidMove`] before the board is touched.
    pub fn update_vectors(
        &mut self,
        p1: Option<Vector>,
        p2: Option<Vector>,
    ) -> Result<bool, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        let p1 = p1.map(Move::try_from).transpose()?;
        let p2 = p2.map(Move::try_from).transpose()?;
        self.update(p1, p2)
    }

    /// Flattened cell codes (see [`Cell::code`]), the input format for
    /// [`crate::policy::MoveEvaluator`].
    ///
    /// Column major, `x * height + y`: every cell of column 0 bottom to top, then
    /// column 1, and so on. This is the layout of a grid indexed `[x][y]` and
    /// flattened, which is what trained evaluators expect.
    pub fn encode(&self) -> Vec<f32> {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..w)
            .cartesian_product(0..h)
            .map(|(x, y)| self.cells[y * w + x].code() as f32)
            .collect()
    }

    fn finish(&mut self, winner: Option<PlayerId>) {
        self.game_over = true;
        self.winner = winner;
        match winner {
            Some(w) => debug!(turn = self.turn, winner = %w, "game over"),
            None => debug!(turn = self.turn, "game over, draw"),
        }
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// returns false, writing nothing, if `pos` is off the board
    fn set_cell(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.height {
            let y = self.height - i - 1;
            for x in 0..self.width {
                let c = self
                    .cell(Position::new(x as i32, y as i32))
                    .unwrap_or_default();
                write!(f, "{} ", c.as_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "turn {}", self.turn)?;
        for player in PlayerId::all() {
            let pos = self.position(player);
            write!(
                f,
                " ({} at ({}, {}) heading {})",
                player,
                pos.x,
                pos.y,
                self.direction(player)
            )?;
        }
        if self.game_over {
            match self.winner {
                Some(w) => write!(f, " game over, {} wins", w)?,
                None => write!(f, " game over, draw")?,
            }
        }
        Ok(())
    }
}

impl VictorDeterminableGame for Board {
    fn is_over(&self) -> bool {
        self.game_over
    }

    fn get_winner(&self) -> Option<PlayerId> {
        if self.game_over {
            self.winner
        } else {
            None
        }
    }
}

impl SizeDeterminableGame for Board {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }
}

impl TurnDeterminableGame for Board {
    fn turn(&self) -> u64 {
        self.turn
    }
}

impl NeighborDeterminableGame for Board {
    fn neighbors(&self, pos: &Position) -> Vec<Position> {
        self.possible_moves(pos)
            .into_iter()
            .map(|(_, p)| p)
            .collect_vec()
    }

    fn possible_moves(&self, pos: &Position) -> Vec<(Move, Position)> {
        Move::all()
            .iter()
            .map(|mv| (*mv, pos.step(*mv)))
            .filter(|(_, p)| self.in_bounds(*p))
            .collect_vec()
    }
}
