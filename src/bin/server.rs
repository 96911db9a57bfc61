//! # Server Binary Entry Point
//!
//! Runs the StegoChat HTTP service.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin server -- --config config/server.toml
//! ```
//!
//! The server will:
//! 1. Load configuration from the given TOML file (defaults when omitted)
//! 2. Apply the `PORT` environment variable, if set
//! 3. Create the display directory for produced images
//! 4. Serve `/embed`, `/extract`, `/api/health` and `/display/*`

use clap::Parser;
use log::info;
use std::sync::Arc;

use stegochat::common::config::{load_config, WebConfig};
use stegochat::storage::ImageStore;
use stegochat::utils::logging::init_logger;
use stegochat::web::{router, AppState};

/// Command-line arguments for the server binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the server configuration file (TOML format)
    ///
    /// Example: config/server.toml
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let config: WebConfig = match &args.config {
        Some(path) => load_config(path)?,
        None => WebConfig::default(),
    };
    let config = config.with_port_override(std::env::var("PORT").ok().as_deref())?;

    let store = ImageStore::new(&config.storage.display_dir);
    store.ensure_dir().await?;

    let state = Arc::new(AppState::new(store));
    let app = router(state, config.storage.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.server.address).await?;
    info!("🌐 Server is running on http://{}", config.server.address);
    info!(
        "📂 Carrier images are stored in {}",
        config.storage.display_dir.display()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
