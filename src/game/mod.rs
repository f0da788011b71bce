mod direction;
mod error;
mod state;

pub use direction::*;
pub use error::*;
pub use state::*;
