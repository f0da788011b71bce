use super::*;
use crate::grid::*;
use crate::*;

/// One player's game: the board, where they stand, and what they've done.
///
/// The only mutation is [`GameState::apply`]. Every accepted move updates
/// position, board, score, counter, and history together; a rejected move
/// touches none of them. Once the goal is entered the game is complete and
/// stays that way.
#[derive(Debug, Clone)]
pub struct GameState {
    id: String,
    board: Board,
    position: Position,
    score: Score,
    moves: usize,
    history: Vec<Direction>,
    complete: bool,
}

impl GameState {
    /// Places the player on the origin, which counts as already visited.
    pub fn new(id: impl Into<String>, mut board: Board) -> Self {
        let position = Position::origin();
        board.clear(position);
        Self {
            id: id.into(),
            board,
            position,
            score: 0,
            moves: 0,
            history: Vec::new(),
            complete: false,
        }
    }

    /// Parses a raw direction token and applies it.
    pub fn apply(&mut self, token: &str) -> Result<Position, MoveError> {
        if self.complete {
            return Err(MoveError::Complete);
        }
        Direction::try_from(token).and_then(|d| self.step(d))
    }

    /// Moves one square. The clamped target must not be visited, so
    /// pushing against an edge re-targets the current (visited) square
    /// and is rejected.
    pub fn step(&mut self, direction: Direction) -> Result<Position, MoveError> {
        if self.complete {
            return Err(MoveError::Complete);
        }
        let target = direction.step(self.position);
        let effect = Effect::from(self.board.get(target));
        if effect.is_visited() {
            return Err(MoveError::Visited(target));
        }
        self.position = target;
        self.score += effect.delta();
        self.board.clear(target);
        self.moves += 1;
        self.history.push(direction);
        self.complete = effect.is_goal();
        Ok(target)
    }
}

impl GameState {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn moves(&self) -> usize {
        self.moves
    }
    pub fn history(&self) -> &[Direction] {
        &self.history
    }
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board of fives with the given overrides.
    fn board(overrides: &[((usize, usize), Cell)]) -> Board {
        let mut cells = [[5; SIZE]; SIZE];
        for &((i, j), v) in overrides {
            cells[i][j] = v;
        }
        Board::from(cells)
    }

    /// Walks down column 0 then right along the bottom row.
    fn walk_to_goal(game: &mut GameState) {
        for _ in 0..SIZE - 1 {
            game.step(Direction::Down).unwrap();
        }
        for _ in 0..SIZE - 1 {
            game.step(Direction::Right).unwrap();
        }
    }

    #[test]
    fn origin_starts_visited() {
        let game = GameState::new("p", board(&[]));
        assert_eq!(game.position(), Position::origin());
        assert_eq!(game.board().get(Position::origin()), VISITED);
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert!(!game.is_complete());
    }

    #[test]
    fn plain_cell_scores_its_value() {
        let mut game = GameState::new("p", board(&[((0, 1), 5)]));
        assert_eq!(game.apply("right"), Ok(Position::new(0, 1)));
        assert_eq!(game.position(), Position::new(0, 1));
        assert_eq!(game.score(), 5);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.board().get(Position::new(0, 1)), VISITED);
        assert_eq!(game.history(), &[Direction::Right]);
    }

    #[test]
    fn powerup_doubles_and_obstacle_penalizes() {
        let mut game = GameState::new("p", board(&[((1, 0), 12), ((2, 0), OBSTACLE)]));
        game.step(Direction::Down).unwrap();
        assert_eq!(game.score(), 24);
        game.step(Direction::Down).unwrap();
        assert_eq!(game.score(), 14);
        game.step(Direction::Right).unwrap();
        game.step(Direction::Up).unwrap();
        game.step(Direction::Up).unwrap();
        game.step(Direction::Left).unwrap_err();
        assert_eq!(game.score(), 14 + 5 + 5 + 5);
    }

    #[test]
    fn score_can_go_negative() {
        let mut game = GameState::new("p", board(&[((0, 1), OBSTACLE)]));
        game.step(Direction::Right).unwrap();
        assert_eq!(game.score(), -OBSTACLE_PENALTY);
    }

    #[test]
    fn edge_push_is_rejected_as_visited() {
        let mut game = GameState::new("p", board(&[]));
        assert_eq!(game.apply("up"), Err(MoveError::Visited(Position::origin())));
        assert_eq!(game.apply("left"), Err(MoveError::Visited(Position::origin())));
        assert_eq!(game.moves(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn revisiting_is_rejected() {
        let mut game = GameState::new("p", board(&[]));
        game.step(Direction::Right).unwrap();
        let before = game.clone();
        assert_eq!(game.step(Direction::Left), Err(MoveError::Visited(Position::origin())));
        assert_eq!(game.position(), before.position());
        assert_eq!(game.score(), before.score());
        assert_eq!(game.board(), before.board());
    }

    #[test]
    fn invalid_token_changes_nothing() {
        let mut game = GameState::new("p", board(&[]));
        let before = game.clone();
        assert!(matches!(game.apply("sideways"), Err(MoveError::Direction(_))));
        assert_eq!(game.position(), before.position());
        assert_eq!(game.score(), before.score());
        assert_eq!(game.moves(), before.moves());
        assert_eq!(game.board(), before.board());
    }

    #[test]
    fn near_miss_tokens_change_nothing() {
        let mut game = GameState::new("p", board(&[]));
        game.step(Direction::Down).unwrap();
        let before = game.clone();
        for token in ["UP", "Up", " up", "up\n", "Down", "RIGHT", " right", "left\t"] {
            assert_eq!(game.apply(token), Err(MoveError::Direction(token.to_string())));
            assert_eq!(game.position(), before.position());
            assert_eq!(game.score(), before.score());
            assert_eq!(game.moves(), before.moves());
            assert_eq!(game.history(), before.history());
            assert_eq!(game.board(), before.board());
        }
    }

    #[test]
    fn goal_adds_bonus_once_and_completes() {
        let mut game = GameState::new("p", board(&[((SIZE - 1, SIZE - 1), GOAL)]));
        walk_to_goal(&mut game);
        let expected = 5 * (2 * (SIZE as Score - 1) - 1) + GOAL_BONUS;
        assert!(game.is_complete());
        assert_eq!(game.score(), expected);
        assert_eq!(game.position(), Position::goal());
    }

    #[test]
    fn goal_delta_is_exactly_the_bonus() {
        let mut game = GameState::new("p", board(&[((SIZE - 1, SIZE - 1), GOAL)]));
        for _ in 0..SIZE - 1 {
            game.step(Direction::Down).unwrap();
        }
        for _ in 0..SIZE - 2 {
            game.step(Direction::Right).unwrap();
        }
        let before = game.score();
        game.step(Direction::Right).unwrap();
        assert_eq!(game.score() - before, GOAL_BONUS);
    }

    #[test]
    fn complete_game_rejects_everything() {
        let mut game = GameState::new("p", board(&[((SIZE - 1, SIZE - 1), GOAL)]));
        walk_to_goal(&mut game);
        let (score, moves, position) = (game.score(), game.moves(), game.position());
        for token in ["up", "down", "left", "right", "bogus"] {
            assert_eq!(game.apply(token), Err(MoveError::Complete));
        }
        assert_eq!(game.score(), score);
        assert_eq!(game.moves(), moves);
        assert_eq!(game.position(), position);
    }

    #[test]
    fn corner_goal_cannot_be_pushed_past() {
        let mut game = GameState::new("p", board(&[]));
        walk_to_goal(&mut game);
        assert_eq!(game.apply("down"), Err(MoveError::Visited(Position::goal())));
    }

    #[test]
    fn accepted_moves_keep_history_in_step() {
        let mut game = GameState::new("p", Board::random());
        for d in Direction::ALL.iter().cycle().take(64) {
            let moves = game.moves();
            if let Ok(at) = game.step(*d) {
                assert_eq!(game.board().get(at), VISITED);
                assert_eq!(game.moves(), moves + 1);
            }
            assert_eq!(game.history().len(), game.moves());
        }
    }
}
