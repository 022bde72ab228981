use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

use compose_core::AssetStore;
use compose_server::config::ServerConfig;
use compose_server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().map_err(anyhow::Error::msg)?;

    if !config.assets_dir.is_dir() {
        bail!("assets directory not found: {}", config.assets_dir.display());
    }

    let state = AppState {
        assets: AssetStore::new(&config.assets_dir),
    };
    let app = router(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        assets_dir = %config.assets_dir.display(),
        "compose server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
