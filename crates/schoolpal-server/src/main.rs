//! Schoolpal AI HTTP Server
//!
//! Axum-based server for the landing page frontend and contact endpoint.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schoolpal_server::{build_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if !config.static_dir.is_dir() {
        tracing::warn!("⚠ Static directory {} not found - frontend will 404", config.static_dir.display());
        tracing::warn!("  Build it with: trunk build --release --dist static crates/schoolpal-web/index.html");
    }

    let app = build_router(AppState::default(), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Schoolpal server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/contact  - Contact form submission");
    tracing::info!("  GET  /*            - Frontend ({})", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
