use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::CatalogHttpServer;
use crate::domain::models::Config;
use crate::infrastructure::setup::build_catalog;

/// Run the HTTP server until Ctrl-C.
pub async fn execute(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let catalog = build_catalog(&config).await?;
    let server = CatalogHttpServer::new(catalog, config.server.clone());

    server
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("HTTP server failed")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
