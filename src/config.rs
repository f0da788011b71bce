use crate::predict::Variant;
use clap::Parser;

/// Server configuration. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Grid game server with a heuristic move predictor", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: String,
    /// HTTP worker threads
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Predictor adjustment variant
    #[arg(long, env = "PREDICTOR_VARIANT", value_enum, default_value_t = Variant::Boost)]
    pub variant: Variant,
    /// Seed for board generation; unset draws from OS entropy
    #[arg(long, env = "GRID_SEED")]
    pub seed: Option<u64>,
}
