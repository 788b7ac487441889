//! SLURM Analytics HTTP Server Binary
//!
//! Loads the analytics document, sets up the HTTP router and serves the
//! derived dashboard payloads.
//!
//! # Usage
//!
//! ```bash
//! # Serve public/slurm_analysis.json, falling back to the bundled example
//! cargo run --bin slurm-analytics-server
//!
//! # Serve a specific document without fallback
//! ANALYTICS_DATA_PATH=/srv/slurm_analysis.json ANALYTICS_FALLBACK=false \
//!   cargo run --bin slurm-analytics-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ANALYTICS_DATA_PATH`: Analytics document path (default: public/slurm_analysis.json)
//! - `ANALYTICS_FALLBACK`: Serve the bundled example if loading fails (default: true)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use slurm_analytics::http::{create_router, AppState};
use slurm_analytics::store::{AnalyticsConfig, DocumentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SLURM Analytics HTTP Server");

    let config = AnalyticsConfig::load()?;
    info!(
        "Document path: {} (fallback {})",
        config.data.path.display(),
        if config.data.fallback { "enabled" } else { "disabled" }
    );

    let store = DocumentStore::open(config.build_source()).await?;
    let snapshot = store.snapshot();
    info!(
        "Serving document from {} ({} jobs)",
        snapshot.origin, snapshot.document.metadata.total_jobs
    );

    let app = create_router(AppState::new(Arc::new(store)));

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
