use anyhow::{Context, Result};
use mineru_mcp::{
    api::{self, HEALTH_PATH, MCP_PATH},
    config, logging,
    mcp::MineruMcpServer,
    parsing::ParsingService,
};
use std::{net::Ipv4Addr, sync::Arc};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();
    let config = config::load_config().context("failed to load configuration")?;

    let parsing =
        Arc::new(ParsingService::new(&config).context("failed to initialize MinerU client")?);
    let app = api::create_router(MineruMcpServer::new(parsing));

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.server_port))
        .await
        .with_context(|| format!("failed to bind port {}", config.server_port))?;

    tracing::info!(
        "Starting MinerU MCP Server (v{})...",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("MinerU service URL: {}", config.mineru_url);
    tracing::info!("Transport mode: {}", config.transport.as_str());
    tracing::info!(
        "MCP endpoint: http://0.0.0.0:{}{}",
        config.server_port,
        MCP_PATH
    );
    tracing::info!(
        "Health check: http://0.0.0.0:{}{}",
        config.server_port,
        HEALTH_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    tracing::info!("MinerU MCP Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
