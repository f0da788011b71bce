use crate::game::MoveError;

/// Failures surfaced by [`super::Arcade`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArcadeError {
    SessionNotFound(String),
    InvalidMove(MoveError),
}

impl From<MoveError> for ArcadeError {
    fn from(e: MoveError) -> Self {
        Self::InvalidMove(e)
    }
}

impl std::fmt::Display for ArcadeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionNotFound(id) => write!(f, "game not found: {}", id),
            Self::InvalidMove(e) => write!(f, "invalid move: {}", e),
        }
    }
}

impl std::error::Error for ArcadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SessionNotFound(_) => None,
            Self::InvalidMove(e) => Some(e),
        }
    }
}
