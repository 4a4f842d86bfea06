use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use securedash::db::init_app_state;
use securedash::router::init_router;
use securedash_config::ServerConfig;
use securedash_observability::{init_logging, init_metrics, metrics_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging()?;

    let state = init_app_state().await?;
    let mut app = init_router(state);

    if let Some(handle) = init_metrics()? {
        app = app.merge(metrics_app(handle));
        info!("Prometheus metrics available at /metrics");
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server running");
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
