use crate::dto::*;
use crate::game::GameState;
use crate::predict::*;

/// A player's game plus everything recorded about predicting it.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    tracker: Tracker,
    precached: usize,
}

impl From<GameState> for Session {
    fn from(game: GameState) -> Self {
        Self {
            game,
            tracker: Tracker::default(),
            precached: 0,
        }
    }
}

impl Session {
    pub fn game(&self) -> &GameState {
        &self.game
    }
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }
    /// Predictions handed to the client so far.
    pub fn precached(&self) -> usize {
        self.precached
    }
    /// Truncates a prediction for the client and books it as served.
    pub fn serve(&mut self, prediction: &Prediction, n: usize) -> Vec<Guess> {
        let served = prediction.take(n);
        self.tracker.observe(prediction);
        self.precached += served.len();
        served
    }
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_moves: self.game.moves(),
            prediction_accuracy: self.tracker.accuracy(),
            score: self.game.score(),
            ai_confidence: self.tracker.confidence(),
            precached_states: self.precached,
        }
    }
}
