//! Game Server Binary
//!
//! Serves the grid game and move predictions over HTTP,
//! with a WebSocket channel for prediction pushes.

use clap::Parser;
use cloudgrid::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    hosting::Server::run(config::Config::parse()).await
}
