use super::MoveError;
use crate::grid::Position;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One of the four moves a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical order. Also the tie-break order when ranking predictions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
    /// One square in this direction, clamped to the board.
    /// Walking into an edge returns `from` unchanged.
    pub fn step(&self, from: Position) -> Position {
        let (row, col) = (from.row(), from.col());
        match self {
            Direction::Up => Position::new(row.saturating_sub(1), col),
            Direction::Down => Position::new((row + 1).min(SIZE - 1), col),
            Direction::Left => Position::new(row, col.saturating_sub(1)),
            Direction::Right => Position::new(row, (col + 1).min(SIZE - 1)),
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Tokens must match exactly: no case folding, no trimming.
impl TryFrom<&str> for Direction {
    type Error = MoveError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(MoveError::Direction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
