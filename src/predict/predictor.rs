use super::*;
use crate::game::Direction;
use crate::game::GameState;
use crate::grid::Position;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// How the positional adjustment treats the direction away from center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Only the center-facing directions gain weight.
    #[default]
    Boost,
    /// Center-facing directions gain weight and their opposites lose some.
    Paired,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Boost => write!(f, "boost"),
            Variant::Paired => write!(f, "paired"),
        }
    }
}

/// Positional next-move heuristic.
///
/// Players are assumed to drift back toward the middle of the board: in the
/// lower half `up` gains weight, otherwise `down` does; in the right half
/// `left` gains weight, otherwise `right` does. Nothing is learned, and the
/// board contents and move history are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Predictor {
    variant: Variant,
}

impl From<Variant> for Predictor {
    fn from(variant: Variant) -> Self {
        Self { variant }
    }
}

impl Predictor {
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn predict(&self, game: &GameState) -> Prediction {
        self.predict_at(game.position())
    }
    pub fn predict_at(&self, at: Position) -> Prediction {
        let vertical = if at.is_lower() {
            Direction::Up
        } else {
            Direction::Down
        };
        let horizontal = if at.is_right() {
            Direction::Left
        } else {
            Direction::Right
        };
        let mut weights = [BASE_WEIGHT; 4];
        for toward in [vertical, horizontal] {
            weights[toward.index()] += CENTER_BOOST;
            if self.variant == Variant::Paired {
                weights[toward.opposite().index()] -= EDGE_DECREMENT;
            }
        }
        let total = weights.iter().sum::<Probability>();
        Prediction::from(Direction::ALL.map(|d| Guess::new(d, weights[d.index()] / total)))
    }
}
