use crate::grid::Position;

/// Reasons a move is rejected. A rejected move changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The goal has already been reached.
    Complete,
    /// The token is not one of up, down, left, right.
    Direction(String),
    /// The target cell was already entered (includes edge-clamped non-moves).
    Visited(Position),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "game already complete"),
            Self::Direction(s) => write!(f, "invalid direction: {:?}", s),
            Self::Visited(p) => write!(f, "cell {} already visited", p),
        }
    }
}

impl std::error::Error for MoveError {}
