use super::*;
use crate::game::Direction;
use crate::*;
use std::collections::VecDeque;

/// Running hit rate of the predictor's top choice against real moves.
///
/// Also keeps a sliding window of the top-choice confidence of recently
/// served predictions, which is what gets reported as "AI confidence".
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    correct: usize,
    total: usize,
    window: VecDeque<Probability>,
}

impl Tracker {
    /// Scores one outcome. Returns whether the prediction was a hit.
    pub fn record(&mut self, predicted: Direction, actual: Direction) -> bool {
        let hit = predicted == actual;
        self.total += 1;
        self.correct += hit as usize;
        hit
    }
    /// Remembers the confidence of a prediction that was served.
    pub fn observe(&mut self, prediction: &Prediction) {
        self.window.push_back(prediction.top().confidence);
        while self.window.len() > CONFIDENCE_WINDOW {
            self.window.pop_front();
        }
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
    pub fn total(&self) -> usize {
        self.total
    }
    /// `correct / total`, or the prior when nothing has been recorded.
    pub fn accuracy(&self) -> Probability {
        ratio(self.correct, self.total)
    }
    /// Mean top-choice confidence over the window, or the prior when empty.
    pub fn confidence(&self) -> Probability {
        match self.window.len() {
            0 => PRIOR_ACCURACY,
            n => self.window.iter().sum::<Probability>() / n as Probability,
        }
    }
}

/// Hit ratio with the prior standing in for an empty denominator.
pub fn ratio(correct: usize, total: usize) -> Probability {
    match total {
        0 => PRIOR_ACCURACY,
        n => correct as Probability / n as Probability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn empty_tracker_reports_prior() {
        let tracker = Tracker::default();
        assert_eq!(tracker.accuracy(), 0.5);
        assert_eq!(tracker.confidence(), 0.5);
    }
    #[test]
    fn three_of_four() {
        let mut tracker = Tracker::default();
        assert!(tracker.record(Direction::Down, Direction::Down));
        assert!(tracker.record(Direction::Right, Direction::Right));
        assert!(tracker.record(Direction::Up, Direction::Up));
        assert!(!tracker.record(Direction::Down, Direction::Left));
        assert_eq!(tracker.correct(), 3);
        assert_eq!(tracker.total(), 4);
        assert_eq!(tracker.accuracy(), 0.75);
    }
    #[test]
    fn confidence_window_is_bounded() {
        let mut tracker = Tracker::default();
        let prediction = Predictor::default().predict_at(Position::origin());
        for _ in 0..CONFIDENCE_WINDOW * 2 {
            tracker.observe(&prediction);
        }
        assert_eq!(tracker.window.len(), CONFIDENCE_WINDOW);
        assert!((tracker.confidence() - prediction.top().confidence).abs() < 1e-9);
    }
}
