use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::board::Board;
use crate::types::{Move, Position};

use super::Policy;

/// Simple bot that chooses randomly from its valid moves.
///
/// The random source is owned by the policy, so a seeded rng gives a
/// reproducible game.
#[derive(Debug, Clone)]
pub struct RandomPolicy<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomPolicy<R> {
    #[allow(missing_docs)]
    pub fn new(rng: R) -> Self {
        RandomPolicy { rng }
    }
}

impl RandomPolicy<SmallRng> {
    /// a policy backed by a `SmallRng` seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        RandomPolicy::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Policy for RandomPolicy<R> {
    fn decide(&mut self, board: &Board, position: Position) -> Option<Move> {
        let valid = Move::all()
            .iter()
            .copied()
            .filter(|mv| board.is_valid_move(position.step(*mv)))
            .collect_vec();
        let choice = valid.choose(&mut self.rng).copied();
        if choice.is_none() {
            trace!(x = position.x, y = position.y, "no valid move");
        }
        choice
    }
}
