mod prediction;
mod predictor;
mod tracker;

pub use prediction::*;
pub use predictor::*;
pub use tracker::*;
