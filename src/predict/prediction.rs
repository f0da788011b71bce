use crate::game::Direction;
use crate::*;
use serde::Serialize;

/// Estimated likelihood that the player's next move is `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guess {
    pub direction: Direction,
    pub probability: Probability,
    pub confidence: Probability,
}

impl Guess {
    /// Confidence is derived: `min(2p, 1)`.
    pub fn new(direction: Direction, probability: Probability) -> Self {
        Self {
            direction,
            probability,
            confidence: (probability * CONFIDENCE_SCALE).min(1.0),
        }
    }
}

/// All four directions ranked from most to least likely.
///
/// Equal probabilities keep the canonical `up, down, left, right` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction([Guess; 4]);

impl Prediction {
    /// Most likely direction.
    pub fn top(&self) -> Guess {
        self.0[0]
    }
    /// Leading `n` guesses, as served to clients.
    pub fn take(&self, n: usize) -> Vec<Guess> {
        self.0.iter().take(n).copied().collect()
    }
    pub fn get(&self, direction: Direction) -> Guess {
        self.0
            .iter()
            .find(|g| g.direction == direction)
            .copied()
            .unwrap_or_else(|| Guess::new(direction, 0.0))
    }
    pub fn iter(&self) -> impl Iterator<Item = &Guess> {
        self.0.iter()
    }
    pub fn rank(&self) -> Vec<Direction> {
        self.0.iter().map(|g| g.direction).collect()
    }
}

impl From<[Guess; 4]> for Prediction {
    fn from(mut guesses: [Guess; 4]) -> Self {
        guesses.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self(guesses)
    }
}
