use crate::board::Board;
use crate::types::{Move, Position, N_MOVES};

use super::Policy;

/// which move each evaluator output slot stands for
const SCORE_ORDER: [Move; N_MOVES] = [Move::Up, Move::Down, Move::Right, Move::Left];

/// An opaque scoring function over the encoded board, e.g. a trained network.
///
/// `features` is [`Board::encode`]. The result holds one score per move, higher
/// is better, in the order up `(0, 1)`, down `(0, -1)`, right `(1, 0)`,
/// left `(-1, 0)`. This is not the [`Move::all`] order.
pub trait MoveEvaluator {
    #[allow(missing_docs)]
    fn evaluate(&self, features: &[f32]) -> [f32; N_MOVES];
}

impl<F> MoveEvaluator for F
where
    F: Fn(&[f32]) -> [f32; N_MOVES],
{
    fn evaluate(&self, features: &[f32]) -> [f32; N_MOVES] {
        self(features)
    }
}

/// Plays whichever move the evaluator scores highest.
///
/// It always answers, even when every move is fatal. Ties go to the lowest
/// output slot and NaN scores are ignored.
#[derive(Debug, Clone)]
pub struct EvaluatorPolicy<E> {
    evaluator: E,
}

impl<E: MoveEvaluator> EvaluatorPolicy<E> {
    #[allow(missing_docs)]
    pub fn new(evaluator: E) -> Self {
        EvaluatorPolicy { evaluator }
    }

    #[allow(missing_docs)]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<E: MoveEvaluator> Policy for EvaluatorPolicy<E> {
    fn decide(&mut self, board: &Board, _position: Position) -> Option<Move> {
        let scores = self.evaluator.evaluate(&board.encode());
        let mut best: Option<(usize, f32)> = None;
        for (i, score) in scores.iter().copied().enumerate() {
            if score.is_nan() {
                continue;
            }
            match best {
                Some((_, b)) if score <= b => {}
                _ => best = Some((i, score)),
            }
        }
        Some(SCORE_ORDER[best.map_or(0, |(i, _)| i)])
    }
}
