use crate::*;
use serde::Serialize;

/// A `(row, col)` coordinate on the board.
///
/// Always within `[0, SIZE)` on both axes. Serializes as a two-element
/// array so the client can index the grid directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }
    /// Starting square of every game.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
    /// Location of the goal cell.
    pub fn goal() -> Self {
        Self::new(SIZE - 1, SIZE - 1)
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// True in rows below the midline.
    pub fn is_lower(&self) -> bool {
        self.row > MIDLINE
    }
    /// True in columns right of the midline.
    pub fn is_right(&self) -> bool {
        self.col > MIDLINE
    }
}

impl From<Position> for [usize; 2] {
    fn from(p: Position) -> Self {
        [p.row, p.col]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
