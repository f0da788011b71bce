//! HTTP and WebSocket transport for the [`Arcade`](crate::arcade::Arcade).
//!
//! Thin glue: handlers validate request fields, call one arcade
//! operation, and map its errors onto status codes.
mod handlers;
mod server;
mod socket;

pub use handlers::*;
pub use server::*;
pub use socket::*;
