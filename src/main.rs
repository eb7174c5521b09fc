//! Helium Dev Server
//!
//! Run with: cargo run --bin helium
//!
//! Serves `helium-ui/dist` (build it first with `trunk build` in `helium-ui/`)
//! on http://127.0.0.1:3000 with history fallback.
//!
//! # Configuration
//!
//! See `helium-cli config` for the file format. Environment variables:
//! - `HELIUM_HOST`, `HELIUM_PORT`: Address to bind
//! - `HELIUM_DIST_DIR`: Built UI directory
//! - `HELIUM_ENVIRONMENT`: Backend the UI is expected to use (dev, test, prod)
//! - `RUST_LOG`: Log filter (default: helium=info,tower_http=debug)

use helium::config::Config;
use helium::logging::init_logging;
use helium::server::{serve, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Starting Helium dev server v{}", env!("CARGO_PKG_VERSION"));

    let environment = config.environment.environment();
    let endpoints = config.environment.endpoints();
    tracing::info!("Environment: {} (API {})", environment, endpoints.api_url);

    if !config.server.dist_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {:?}; run `trunk build` in helium-ui first",
            config.server.dist_dir
        );
    }

    let state = ServerState::from_config(&config.server, environment);
    serve(state, &config.server).await?;

    tracing::info!("Helium dev server stopped");
    Ok(())
}
