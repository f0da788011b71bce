//! Grid game engine, heuristic move predictor, and the session registry
//! that serves them over HTTP and WebSocket.
//!
//! ## Modules
//!
//! - [`grid`] — board, positions, cell effects, random generation
//! - [`game`] — directions and the per-player move state machine
//! - [`predict`] — direction probabilities and accuracy tracking
//! - [`arcade`] — session registry and the three public game operations
//! - [`dto`] — JSON request and response shapes
//! - [`hosting`] — actix-web routes and the prediction socket (feature `server`)
pub mod arcade;
pub mod dto;
pub mod game;
pub mod grid;
pub mod predict;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw cell value on the board.
pub type Cell = i32;
/// Accumulated player score. Obstacles can drive it negative.
pub type Score = i32;
/// Direction weights, confidences, and accuracy ratios.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from ambient entropy.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD LAYOUT
// ============================================================================
/// Rows and columns on the square board.
pub const SIZE: usize = 8;
/// Visited or empty cell.
pub const VISITED: Cell = 0;
/// Obstacle cell.
pub const OBSTACLE: Cell = -1;
/// Goal cell, always at the bottom-right corner.
pub const GOAL: Cell = 100;
/// Inclusive range of plain cell values.
pub const PLAIN_MIN: Cell = 1;
pub const PLAIN_MAX: Cell = 9;
/// Inclusive range of power-up cell values.
pub const POWERUP_MIN: Cell = 10;
pub const POWERUP_MAX: Cell = 15;
/// Power-up placements per board (with replacement).
pub const POWERUP_COUNT: usize = 8;
/// Obstacle placements per board (with replacement).
pub const OBSTACLE_COUNT: usize = 6;

// ============================================================================
// SCORING
// ============================================================================
/// Score lost when entering an obstacle.
pub const OBSTACLE_PENALTY: Score = 10;
/// Power-up cells score their value times this.
pub const POWERUP_MULTIPLIER: Score = 2;
/// Score gained when entering the goal.
pub const GOAL_BONUS: Score = 1000;

// ============================================================================
// MOVE PREDICTION
// p(d) ∝ 0.25 + boost toward the board center (− decrement away from it)
// ============================================================================
/// Prior weight of each direction before positional adjustment.
pub const BASE_WEIGHT: Probability = 0.25;
/// Weight added to the direction pointing back toward the center.
pub const CENTER_BOOST: Probability = 0.1;
/// Weight removed from the opposing direction in the paired variant.
pub const EDGE_DECREMENT: Probability = 0.05;
/// Rows and columns above this index count as the lower/right half.
pub const MIDLINE: usize = 3;
/// Confidence is probability scaled by this, capped at 1.
pub const CONFIDENCE_SCALE: Probability = 2.0;
/// Accuracy and confidence reported before anything is recorded.
pub const PRIOR_ACCURACY: Probability = 0.5;
/// Number of recent top-prediction confidences averaged for reporting.
pub const CONFIDENCE_WINDOW: usize = 100;
/// Predictions returned over HTTP.
pub const HTTP_PREDICTIONS: usize = 5;
/// Predictions pushed over the socket.
pub const SOCKET_PREDICTIONS: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Sessions live in memory only, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
