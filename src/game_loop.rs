//! Drives a [`Board`] with two policies until somebody crashes.
//!
//! ```
//! use lightcycle_game_types::board::BoardConfig;
//! use lightcycle_game_types::game_loop::GameLoop;
//! use lightcycle_game_types::policy::RandomPolicy;
//! use lightcycle_game_types::types::VictorDeterminableGame;
//!
//! let board = BoardConfig::default().build().unwrap();
//! let game = GameLoop::new(board, RandomPolicy::seeded(1), RandomPolicy::seeded(2));
//! let states: Vec<_> = game.collect();
//! assert!(!states[0].is_over());
//! assert!(states.last().unwrap().is_over());
//! ```
use std::time::Instant;

use tracing::trace;

use crate::board::Board;
use crate::error::GameError;
use crate::policy::Policy;
use crate::types::{
    PlayerId, SimulatorInstruments, TurnDeterminableGame, VictorDeterminableGame,
};

/// A board plus the two policies playing on it.
///
/// As an [`Iterator`] it yields the starting board, then the board after every
/// tick, and stops after yielding the first finished board.
#[derive(Debug, Clone)]
pub struct GameLoop<P1, P2> {
    board: Board,
    policy1: P1,
    policy2: P2,
    started: bool,
    exhausted: bool,
}

impl<P1: Policy, P2: Policy> GameLoop<P1, P2> {
    #[allow(missing_docs)]
    pub fn new(board: Board, policy1: P1, policy2: P2) -> Self {
        GameLoop {
            board,
            policy1,
            policy2,
            started: false,
            exhausted: false,
        }
    }

    /// the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[allow(missing_docs)]
    pub fn policies_mut(&mut self) -> (&mut P1, &mut P2) {
        (&mut self.policy1, &mut self.policy2)
    }

    /// Asks both policies for a move and applies them together. Returns whether
    /// the game continues.
    ///
    /// Neither policy is consulted once the game is over.
    pub fn tick(&mut self) -> Result<bool, GameError> {
        if self.board.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let p1 = self
            .policy1
            .decide(&self.board, self.board.position(PlayerId::One));
        let p2 = self
            .policy2
            .decide(&self.board, self.board.position(PlayerId::Two));
        trace!(turn = self.board.turn(), ?p1, ?p2, "tick");

        self.board.update(p1, p2)
    }

    /// [`GameLoop::tick`], reporting how long the tick took
    pub fn tick_observed<I: SimulatorInstruments>(
        &mut self,
        instruments: &I,
    ) -> Result<bool, GameError> {
        let start = Instant::now();
        let result = self.tick();
        instruments.observe_simulation(start.elapsed());
        result
    }

    /// plays until the game ends and returns the final board
    pub fn run_to_completion(mut self) -> Result<Board, GameError> {
        while !self.board.is_over() {
            self.tick()?;
        }
        Ok(self.board)
    }
}

impl<P1: Policy, P2: Policy> Iterator for GameLoop<P1, P2> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        if self.exhausted {
            return None;
        }

        if self.started {
            if self.tick().is_err() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }

        if self.board.is_over() {
            self.exhausted = true;
        }
        Some(self.board.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardConfig, Cell};
    use crate::policy::{EvaluatorPolicy, MoveEvaluator, RandomPolicy, StraightPolicy};
    use crate::types::{Move, Position, N_MOVES};
    use std::cell::Cell as Counter;
    use std::time::Duration;

    fn board(p1: (i32, i32), p2: (i32, i32), d1: Move, d2: Move, size: u32) -> Board {
        Board::new(size, size, p1.into(), p2.into(), d1, d2).unwrap()
    }

    /// the default 20x20 setup, both players heading right
    fn default_board() -> Board {
        BoardConfig::default().build().unwrap()
    }

    fn scripted(moves: Vec<Option<Move>>) -> impl FnMut(&Board, Position) -> Option<Move> {
        let mut moves = moves.into_iter();
        move |_: &Board, _: Position| moves.next().flatten()
    }

    #[derive(Debug, Default)]
    struct Instruments {
        ticks: Counter<u32>,
    }

    impl SimulatorInstruments for Instruments {
        fn observe_simulation(&self, _duration: Duration) {
            self.ticks.set(self.ticks.get() + 1);
        }
    }

    #[test]
    fn test_head_on_yields_start_and_draw() {
        let game = GameLoop::new(
            board((1, 2), (3, 2), Move::Right, Move::Left, 5),
            StraightPolicy,
            StraightPolicy,
        );
        let states: Vec<Board> = game.collect();
        assert_eq!(states.len(), 2);
        assert!(!states[0].is_over());
        assert!(states[1].is_over());
        assert_eq!(states[1].get_winner(), None);
    }

    #[test]
    fn test_off_the_edge_loses() {
        let mut game = GameLoop::new(
            board((0, 0), (2, 2), Move::Right, Move::Left, 3),
            StraightPolicy,
            scripted(vec![Some(Move::Left), Some(Move::Down), Some(Move::Left)]),
        );
        assert_eq!(game.tick(), Ok(true));
        assert_eq!(game.tick(), Ok(true));
        assert_eq!(game.board().position(PlayerId::One), Position::new(2, 0));
        assert_eq!(game.tick(), Ok(false));
        assert_eq!(game.board().get_winner(), Some(PlayerId::Two));
        assert_eq!(game.board().position(PlayerId::Two), Position::new(0, 1));
    }

    #[test]
    fn test_off_the_edge_together_is_a_draw() {
        let game = GameLoop::new(
            board((0, 0), (0, 2), Move::Right, Move::Right, 3),
            StraightPolicy,
            StraightPolicy,
        );
        let end = game.run_to_completion().unwrap();
        assert_eq!(end.turn(), 3);
        assert!(end.is_over());
        assert_eq!(end.get_winner(), None);
        assert_eq!(end.position(PlayerId::One), Position::new(2, 0));
    }

    #[test]
    fn test_iterator_ends_after_first_finished_board() {
        let game = GameLoop::new(
            default_board(),
            RandomPolicy::seeded(3),
            RandomPolicy::seeded(4),
        );
        let states: Vec<Board> = game.collect();
        let last = states.last().unwrap();
        assert_eq!(states.len() as u64, last.turn() + 1);
        assert_eq!(states.iter().filter(|b| b.is_over()).count(), 1);
        assert!(last.is_over());
        for (i, state) in states.iter().enumerate() {
            assert_eq!(state.turn(), i as u64);
        }
    }

    #[test]
    fn test_iterator_is_not_restartable() {
        let mut game = GameLoop::new(
            board((1, 2), (3, 2), Move::Right, Move::Left, 5),
            StraightPolicy,
            StraightPolicy,
        );
        assert!(game.next().is_some());
        assert!(game.next().is_some());
        assert!(game.next().is_none());
        assert!(game.next().is_none());
    }

    #[test]
    fn test_finished_board_yields_once() {
        let mut b = board((1, 2), (3, 2), Move::Right, Move::Left, 5);
        b.update(None, None).unwrap();
        let mut game = GameLoop::new(b.clone(), StraightPolicy, StraightPolicy);
        assert_eq!(game.next(), Some(b));
        assert_eq!(game.next(), None);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let play = |s1, s2| {
            GameLoop::new(
                default_board(),
                RandomPolicy::seeded(s1),
                RandomPolicy::seeded(s2),
            )
            .run_to_completion()
            .unwrap()
        };
        assert_eq!(play(10, 20), play(10, 20));
        assert_eq!(play(5, 6), play(5, 6));
    }

    #[test]
    fn test_random_games_keep_the_grid_invariants() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
        for seed in 0..20 {
            let game = GameLoop::new(
                default_board(),
                RandomPolicy::seeded(seed),
                RandomPolicy::seeded(seed + 1000),
            );
            let mut previous: Option<Board> = None;
            for state in game {
                let heads = |c: Cell| state.cells().iter().filter(|x| **x == c).count();
                if !state.is_over() {
                    assert_eq!(heads(Cell::OccupiedP1), 1);
                    assert_eq!(heads(Cell::OccupiedP2), 1);
                }
                if let Some(prev) = previous {
                    for (before, after) in prev.cells().iter().zip(state.cells()) {
                        if !before.is_empty() {
                            assert!(!after.is_empty());
                        }
                    }
                }
                previous = Some(state);
            }
        }
    }

    #[test]
    fn test_tick_after_game_over_skips_policies() {
        let calls = Counter::new(0);
        let counting = |_: &Board, _: Position| {
            calls.set(calls.get() + 1);
            None
        };
        let mut game = GameLoop::new(
            board((1, 2), (3, 2), Move::Right, Move::Left, 5),
            counting,
            StraightPolicy,
        );
        assert_eq!(game.tick(), Ok(false));
        let finished = game.board().clone();
        assert_eq!(game.tick(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.tick(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.board(), &finished);
        drop(game);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_policies_see_their_own_position() {
        let p1 = |b: &Board, pos: Position| {
            assert_eq!(pos, b.position(PlayerId::One));
            None
        };
        let p2 = |b: &Board, pos: Position| {
            assert_eq!(pos, b.position(PlayerId::Two));
            None
        };
        let end = GameLoop::new(board((0, 0), (4, 4), Move::Up, Move::Down, 5), p1, p2)
            .run_to_completion()
            .unwrap();
        assert!(end.is_over());
    }

    #[test]
    fn test_tick_observed() {
        let instruments = Instruments::default();
        let mut game = GameLoop::new(
            board((0, 0), (0, 2), Move::Right, Move::Right, 3),
            StraightPolicy,
            StraightPolicy,
        );
        while game.tick_observed(&instruments).unwrap() {}
        assert_eq!(instruments.ticks.get(), 3);
        assert!(game.tick_observed(&instruments).is_err());
        assert_eq!(instruments.ticks.get(), 4);
    }

    #[test]
    fn test_evaluator_policy_drives_a_game() {
        let always_up =
            EvaluatorPolicy::new(|_: &[f32]| -> [f32; N_MOVES] { [1.0, 0.0, 0.0, 0.0] });
        let mut game = GameLoop::new(
            board((0, 0), (3, 0), Move::Right, Move::Up, 4),
            always_up,
            StraightPolicy,
        );
        assert_eq!(game.tick(), Ok(true));
        assert_eq!(game.board().position(PlayerId::One), Position::new(0, 1));
        let (evaluator_policy, _) = game.policies_mut();
        assert_eq!(
            evaluator_policy.evaluator().evaluate(&[0.0]),
            [1.0, 0.0, 0.0, 0.0]
        );
        let end = game.run_to_completion().unwrap();
        // both run up the board and off the top together
        assert_eq!(end.get_winner(), None);
        assert_eq!(end.turn(), 4);
    }
}
