use std::io;

use anyhow::Result;
use tracing::info;

use rookery_play::Session;

fn main() -> Result<()> {
    // stdout carries the session protocol, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("rookery starting");
    Session::stdio().run(io::BufReader::new(io::stdin()))?;
    Ok(())
}
