//! Session registry.
//!
//! One [`Arcade`] per process owns every player's [`Session`] and exposes
//! the start, move, and stats operations the transport layer calls.
mod arcade;
mod error;
mod session;

pub use arcade::*;
pub use error::*;
pub use session::*;
