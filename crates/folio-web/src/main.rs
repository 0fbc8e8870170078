//! Folio Web Server
//!
//! Serves the portfolio page: the HTML shell at `/`, the egui WASM bundle
//! under `/pkg` and image assets under `/images`.

mod config;
mod routes;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Serving static files from: {}", config.static_dir.display());
    tracing::info!("Serving WASM bundle from: {}", config.pkg_dir.display());
    if !config.pkg_dir.exists() {
        tracing::warn!(
            "WASM bundle directory {} does not exist; build folio-ui with wasm-bindgen first",
            config.pkg_dir.display()
        );
    }

    let app = routes::create_router(&config);
    let addr = config.addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", config.port);
            }
            return Err(e).with_context(|| format!("Failed to bind to {}", addr));
        }
    };

    tracing::info!("Folio running on http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
