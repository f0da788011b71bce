use crate::*;

/// What happens to the player's score when a cell is entered.
///
/// Classification follows the raw value: `0` is visited, `-1` is an
/// obstacle, `100` is the goal, anything else at or above the power-up
/// floor doubles, and everything left adds itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Visited,
    Obstacle,
    Goal,
    PowerUp(Cell),
    Plain(Cell),
}

impl Effect {
    /// Score change applied on entry.
    pub fn delta(&self) -> Score {
        match *self {
            Effect::Visited => 0,
            Effect::Obstacle => -OBSTACLE_PENALTY,
            Effect::Goal => GOAL_BONUS,
            Effect::PowerUp(v) => v * POWERUP_MULTIPLIER,
            Effect::Plain(v) => v,
        }
    }
    pub fn is_goal(&self) -> bool {
        matches!(self, Effect::Goal)
    }
    pub fn is_visited(&self) -> bool {
        matches!(self, Effect::Visited)
    }
}

impl From<Cell> for Effect {
    fn from(value: Cell) -> Self {
        match value {
            VISITED => Effect::Visited,
            OBSTACLE => Effect::Obstacle,
            GOAL => Effect::Goal,
            v if v >= POWERUP_MIN => Effect::PowerUp(v),
            v => Effect::Plain(v),
        }
    }
}
