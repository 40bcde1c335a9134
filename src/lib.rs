#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for simulating two-player light-cycle games.
//!
//! Both players move at the same time every tick and leave a trail behind them.
//! Running off the board, into any trail or into the other player ends the game.
//! The goal is to provide a small, exact rules engine that bots and training
//! harnesses can drive many games through.
//!
//! - [`board::Board`] holds the grid and applies the simultaneous update rule
//! - [`policy::Policy`] is what a bot implements to choose its moves
//! - [`game_loop::GameLoop`] wires two policies to a board and iterates the game
//!
//! ```
//! use lightcycle_game_types::board::Board;
//! use lightcycle_game_types::game_loop::GameLoop;
//! use lightcycle_game_types::policy::{RandomPolicy, StraightPolicy};
//! use lightcycle_game_types::types::{Move, Position, VictorDeterminableGame};
//!
//! let board = Board::new(
//!     10,
//!     10,
//!     Position::new(2, 5),
//!     Position::new(7, 5),
//!     Move::Right,
//!     Move::Left,
//! )
//! .unwrap();
//! let finished = GameLoop::new(board, RandomPolicy::seeded(42), StraightPolicy)
//!     .run_to_completion()
//!     .unwrap();
//! assert!(finished.is_over());
//! ```

pub mod board;
pub mod error;
pub mod game_loop;
pub mod policy;
pub mod types;
