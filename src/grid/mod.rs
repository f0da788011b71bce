mod board;
mod cell;
mod position;

pub use board::*;
pub use cell::*;
pub use position::*;
