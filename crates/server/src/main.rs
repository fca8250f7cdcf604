//! Phonebook Server - HTTP API for the user directory
//!
//! This binary serves the in-memory user directory over REST with
//! prioritized multi-criteria search.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
