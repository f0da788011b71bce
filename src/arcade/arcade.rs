use super::*;
use crate::dto::*;
use crate::game::GameState;
use crate::grid::Board;
use crate::predict::*;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

type Shared = Arc<Mutex<Session>>;

/// Owns every live session and the predictor that watches them.
///
/// The map lock is held only to insert or look up a session; game logic
/// runs under that session's own lock. Sessions are never evicted.
pub struct Arcade {
    predictor: Predictor,
    rng: Mutex<SmallRng>,
    sessions: RwLock<HashMap<String, Shared>>,
}

impl Default for Arcade {
    fn default() -> Self {
        Self::new(Predictor::default(), None)
    }
}

impl Arcade {
    /// A fixed seed makes every generated board reproducible.
    pub fn new(predictor: Predictor, seed: Option<u64>) -> Self {
        Self {
            predictor,
            rng: Mutex::new(seed.map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64)),
            sessions: RwLock::new(HashMap::new()),
        }
    }
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Arcade {
    /// Opens a game on a freshly generated board.
    /// Without an id, one is derived from the wall clock.
    pub async fn start(&self, id: Option<String>) -> GameStarted {
        let id = id.unwrap_or_else(Self::stamp);
        let board = Board::generate(&mut *self.rng.lock().await);
        self.register(GameState::new(id, board)).await
    }

    /// Registers an existing game, replacing any session under the same id.
    pub async fn register(&self, game: GameState) -> GameStarted {
        let id = game.id().to_string();
        let mut session = Session::from(game);
        let prediction = self.predictor.predict(session.game());
        let ai_predictions = session.serve(&prediction, HTTP_PREDICTIONS);
        let started = GameStarted {
            game_id: id.clone(),
            grid: *session.game().board(),
            player_position: session.game().position(),
            ai_predictions,
            score: session.game().score(),
            moves_made: session.game().moves(),
        };
        match self
            .sessions
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(session)))
        {
            Some(_) => log::info!("replaced game {}", id),
            None => log::info!("started game {}", id),
        }
        started
    }

    /// Applies a move and scores the predictor's pre-move guess against it.
    pub async fn play(&self, id: &str, token: &str) -> Result<MoveMade, ArcadeError> {
        let shared = self.session(id).await?;
        let mut session = shared.lock().await;
        let guess = self.predictor.predict(session.game()).top().direction;
        let position = session
            .game_mut()
            .apply(token)
            .inspect_err(|e| log::debug!("[{}] rejected {:?}: {}", id, token, e))?;
        if let Some(&actual) = session.game().history().last() {
            let hit = session.tracker_mut().record(guess, actual);
            log::debug!(
                "[{}] predicted {}, moved {} ({}) accuracy {:.1}% ({}/{})",
                id,
                guess,
                actual,
                if hit { "hit" } else { "miss" },
                session.tracker().accuracy() * 100.0,
                session.tracker().correct(),
                session.tracker().total(),
            );
        }
        if session.game().is_complete() {
            log::info!("[{}] reached goal with score {}", id, session.game().score());
        }
        let prediction = self.predictor.predict(session.game());
        let ai_predictions = session.serve(&prediction, HTTP_PREDICTIONS);
        Ok(MoveMade {
            success: true,
            new_position: position,
            grid: *session.game().board(),
            score: session.game().score(),
            ai_predictions,
            prediction_accuracy: session.tracker().accuracy(),
            moves_made: session.game().moves(),
            game_completed: session.game().is_complete(),
        })
    }

    /// Figures for one session, or aggregated over all of them.
    pub async fn stats(&self, id: Option<&str>) -> Result<Stats, ArcadeError> {
        match id {
            None => Ok(Stats::Overall(self.overall().await)),
            Some(id) => {
                let shared = self.session(id).await?;
                let stats = shared.lock().await.stats();
                Ok(Stats::Session(stats))
            }
        }
    }

    /// Leading predictions for the socket channel.
    pub async fn forecast(&self, id: &str) -> Result<Forecast, ArcadeError> {
        let shared = self.session(id).await?;
        let mut session = shared.lock().await;
        let prediction = self.predictor.predict(session.game());
        let predictions = session.serve(&prediction, SOCKET_PREDICTIONS);
        Ok(Forecast {
            predictions,
            confidence: session.tracker().confidence(),
        })
    }
}

impl Arcade {
    async fn session(&self, id: &str) -> Result<Shared, ArcadeError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ArcadeError::SessionNotFound(id.to_string()))
    }

    async fn overall(&self) -> OverallStats {
        let sessions = self
            .sessions
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<Shared>>();
        let mut correct = 0;
        let mut total = 0;
        let mut confidence = 0.0;
        for shared in sessions.iter() {
            let session = shared.lock().await;
            correct += session.tracker().correct();
            total += session.tracker().total();
            confidence += session.tracker().confidence();
        }
        OverallStats {
            total_games: sessions.len(),
            overall_accuracy: ratio(correct, total),
            ai_confidence: match sessions.len() {
                0 => PRIOR_ACCURACY,
                n => confidence / n as Probability,
            },
        }
    }

    fn stamp() -> String {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        format!("player_{}", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::game::MoveError;
    use crate::grid::Position;

    fn seeded() -> Arcade {
        Arcade::new(Predictor::default(), Some(7))
    }

    fn corridor() -> GameState {
        let mut cells = [[3; SIZE]; SIZE];
        cells[SIZE - 1][SIZE - 1] = GOAL;
        GameState::new("corridor", Board::from(cells))
    }

    #[tokio::test]
    async fn start_registers_with_given_id() {
        let arcade = seeded();
        let started = arcade.start(Some(String::from("alice"))).await;
        assert_eq!(started.game_id, "alice");
        assert_eq!(started.player_position, Position::origin());
        assert_eq!(started.score, 0);
        assert_eq!(started.moves_made, 0);
        assert_eq!(started.ai_predictions.len(), 4);
        assert_eq!(started.ai_predictions[0].direction, Direction::Down);
        assert_eq!(arcade.len().await, 1);
    }

    #[tokio::test]
    async fn start_without_id_stamps_one() {
        let started = seeded().start(None).await;
        assert!(started.game_id.starts_with("player_"));
    }

    #[tokio::test]
    async fn seeded_arcades_deal_identical_boards() {
        let a = seeded().start(None).await;
        let b = seeded().start(None).await;
        assert_eq!(a.grid, b.grid);
    }

    #[tokio::test]
    async fn restart_replaces_session() {
        let arcade = seeded();
        arcade.start(Some(String::from("bob"))).await;
        arcade.play("bob", "right").await.unwrap();
        arcade.start(Some(String::from("bob"))).await;
        assert_eq!(arcade.len().await, 1);
        match arcade.stats(Some("bob")).await.unwrap() {
            Stats::Session(stats) => assert_eq!(stats.total_moves, 0),
            Stats::Overall(_) => panic!("expected session stats"),
        }
    }

    #[tokio::test]
    async fn unknown_session() {
        let arcade = seeded();
        assert_eq!(
            arcade.play("ghost", "up").await.unwrap_err(),
            ArcadeError::SessionNotFound(String::from("ghost"))
        );
        assert!(arcade.stats(Some("ghost")).await.is_err());
        assert!(arcade.forecast("ghost").await.is_err());
    }

    #[tokio::test]
    async fn invalid_moves_are_reported() {
        let arcade = seeded();
        arcade.start(Some(String::from("carol"))).await;
        assert!(matches!(
            arcade.play("carol", "diagonal").await,
            Err(ArcadeError::InvalidMove(MoveError::Direction(_)))
        ));
        assert!(matches!(
            arcade.play("carol", "up").await,
            Err(ArcadeError::InvalidMove(MoveError::Visited(_)))
        ));
    }

    #[tokio::test]
    async fn accuracy_follows_pre_move_guess() {
        let arcade = seeded();
        arcade.start(Some(String::from("dave"))).await;
        // at (0,0) the top guess is down
        let first = arcade.play("dave", "down").await.unwrap();
        assert_eq!(first.new_position, Position::new(1, 0));
        assert_eq!(first.prediction_accuracy, 1.0);
        // at (1,0) the top guess is still down
        let second = arcade.play("dave", "right").await.unwrap();
        assert_eq!(second.new_position, Position::new(1, 1));
        assert_eq!(second.prediction_accuracy, 0.5);
        assert_eq!(second.moves_made, 2);
    }

    #[tokio::test]
    async fn rejected_moves_leave_accuracy_alone() {
        let arcade = seeded();
        arcade.start(Some(String::from("erin"))).await;
        arcade.play("erin", "left").await.unwrap_err();
        match arcade.stats(Some("erin")).await.unwrap() {
            Stats::Session(stats) => {
                assert_eq!(stats.total_moves, 0);
                assert_eq!(stats.prediction_accuracy, PRIOR_ACCURACY);
            }
            Stats::Overall(_) => panic!("expected session stats"),
        }
    }

    #[tokio::test]
    async fn reaching_goal_completes() {
        let arcade = seeded();
        arcade.register(corridor()).await;
        let mut last = None;
        for token in std::iter::repeat("down")
            .take(SIZE - 1)
            .chain(std::iter::repeat("right").take(SIZE - 1))
        {
            last = Some(arcade.play("corridor", token).await.unwrap());
        }
        let last = last.unwrap();
        assert!(last.game_completed);
        assert_eq!(last.score, 3 * (2 * (SIZE as Score - 1) - 1) + GOAL_BONUS);
        assert!(matches!(
            arcade.play("corridor", "up").await,
            Err(ArcadeError::InvalidMove(MoveError::Complete))
        ));
    }

    #[tokio::test]
    async fn session_stats_count_served_predictions() {
        let arcade = seeded();
        arcade.start(Some(String::from("fay"))).await;
        arcade.play("fay", "down").await.unwrap();
        arcade.forecast("fay").await.unwrap();
        match arcade.stats(Some("fay")).await.unwrap() {
            Stats::Session(stats) => {
                assert_eq!(stats.total_moves, 1);
                assert_eq!(stats.precached_states, 4 + 4 + 3);
                assert!(stats.ai_confidence > 0.5);
            }
            Stats::Overall(_) => panic!("expected session stats"),
        }
    }

    #[tokio::test]
    async fn overall_stats_pool_sessions() {
        let arcade = seeded();
        match arcade.stats(None).await.unwrap() {
            Stats::Overall(stats) => {
                assert_eq!(stats.total_games, 0);
                assert_eq!(stats.overall_accuracy, PRIOR_ACCURACY);
                assert_eq!(stats.ai_confidence, PRIOR_ACCURACY);
            }
            Stats::Session(_) => panic!("expected overall stats"),
        }
        arcade.start(Some(String::from("g1"))).await;
        arcade.start(Some(String::from("g2"))).await;
        arcade.play("g1", "down").await.unwrap();
        arcade.play("g2", "right").await.unwrap();
        arcade.play("g2", "down").await.unwrap();
        arcade.play("g2", "down").await.unwrap();
        match arcade.stats(None).await.unwrap() {
            Stats::Overall(stats) => {
                assert_eq!(stats.total_games, 2);
                assert_eq!(stats.overall_accuracy, 0.75);
            }
            Stats::Session(_) => panic!("expected overall stats"),
        }
    }

    #[tokio::test]
    async fn forecast_serves_three() {
        let arcade = seeded();
        arcade.start(Some(String::from("hal"))).await;
        let forecast = arcade.forecast("hal").await.unwrap();
        assert_eq!(forecast.predictions.len(), SOCKET_PREDICTIONS);
        assert_eq!(forecast.predictions[0].direction, Direction::Down);
    }
}
