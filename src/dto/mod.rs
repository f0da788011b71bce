//! Data transfer objects for the game API.
//!
//! Request and response types for the HTTP routes and the prediction
//! socket, serializable via `serde`. Field names are the ones the browser
//! client reads, so they stay snake_case and stable.
mod message;
mod request;
mod response;

pub use message::*;
pub use request::*;
pub use response::*;
