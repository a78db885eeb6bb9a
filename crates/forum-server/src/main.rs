//! Forum server binary.
//!
//! Serves thread pages and the moderation-modal API over HTTP.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `FORUM_CONFIG` (default `forum-config.yaml`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the route table, page template, and moderation context
//! 4. Serve until `Ctrl-C`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use forum_web::{AppState, ForumConfig, LogFormat, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "forum-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the route table
/// or template fails to build, or the server cannot bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config_path = std::env::var_os("FORUM_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = ForumConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        config = %config_path.display(),
        host = config.server.host,
        port = config.server.port,
        "forum-server starting"
    );

    // 3. Build shared state.
    let state = Arc::new(AppState::new().context("building application state")?);
    let routes: Vec<_> = state.thread_page.routes().collect();
    info!(?routes, "Thread page routes registered");

    // 4. Serve.
    forum_web::start_server(&config.server, state)
        .await
        .context("running forum server")?;

    info!("forum-server exited cleanly");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
