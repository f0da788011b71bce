use crate::grid::Board;
use crate::grid::Position;
use crate::predict::Guess;
use crate::*;
use serde::Serialize;

/// Snapshot returned when a game starts.
#[derive(Debug, Clone, Serialize)]
pub struct GameStarted {
    pub game_id: String,
    pub grid: Board,
    pub player_position: Position,
    pub ai_predictions: Vec<Guess>,
    pub score: Score,
    pub moves_made: usize,
}

/// Snapshot returned after an accepted move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveMade {
    pub success: bool,
    pub new_position: Position,
    pub grid: Board,
    pub score: Score,
    pub ai_predictions: Vec<Guess>,
    pub prediction_accuracy: Probability,
    pub moves_made: usize,
    pub game_completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub total_moves: usize,
    pub prediction_accuracy: Probability,
    pub score: Score,
    pub ai_confidence: Probability,
    pub precached_states: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallStats {
    pub total_games: usize,
    pub overall_accuracy: Probability,
    pub ai_confidence: Probability,
}

/// One session's figures, or the aggregate over all of them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Stats {
    Session(SessionStats),
    Overall(OverallStats),
}

/// Leading predictions for a session, pushed over the socket.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub predictions: Vec<Guess>,
    pub confidence: Probability,
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            reason: None,
        }
    }
    pub fn because(error: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            error: error.into(),
            reason: Some(reason.to_string()),
        }
    }
}
