use super::*;
use crate::*;
use rand::Rng;
use serde::Serialize;

/// The 8×8 grid of cell values.
///
/// Serializes as nested arrays, row-major, which is what the client
/// renders. Cells are cleared to [`VISITED`] as the player enters them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board([[Cell; SIZE]; SIZE]);

impl Board {
    /// Lays out a fresh board from the given random source.
    ///
    /// Power-ups and obstacles are dropped on uniformly random squares
    /// with replacement, so later placements may overwrite earlier ones.
    /// The goal is written last and can never be covered.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [[VISITED; SIZE]; SIZE];
        cells
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|cell| *cell = rng.random_range(PLAIN_MIN..=PLAIN_MAX));
        for _ in 0..POWERUP_COUNT {
            let (i, j) = (rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            cells[i][j] = rng.random_range(POWERUP_MIN..=POWERUP_MAX);
        }
        for _ in 0..OBSTACLE_COUNT {
            let (i, j) = (rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            cells[i][j] = OBSTACLE;
        }
        let goal = Position::goal();
        cells[goal.row()][goal.col()] = GOAL;
        Self(cells)
    }
    pub fn get(&self, at: Position) -> Cell {
        self.0[at.row()][at.col()]
    }
    /// Marks a cell as visited.
    pub fn clear(&mut self, at: Position) {
        self.0[at.row()][at.col()] = VISITED;
    }
    /// Row-major iterator over every cell value.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }
    /// Number of cells holding exactly `value`.
    pub fn count(&self, value: Cell) -> usize {
        self.cells().filter(|&c| c == value).count()
    }
}

impl From<[[Cell; SIZE]; SIZE]> for Board {
    fn from(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self(cells)
    }
}

impl Arbitrary for Board {
    fn random() -> Self {
        Self::generate(&mut rand::rng())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.iter() {
            for cell in row.iter() {
                write!(f, "{:>4}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
