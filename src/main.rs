//! File tree server - Entry Point
//!
//! Serves a sandboxed directory tree over a small JSON HTTP API.

use log::{error, info};

use filetree_server::error::ServerError;
use filetree_server::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default `info` filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Launching file tree server...");

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    info!(
        "Configuration: address {}, storage root {}, max tree depth {}",
        config.socket_address(),
        config.storage_root,
        config.max_tree_depth
    );

    let server = Server::new(config).await?;
    server.start().await
}
