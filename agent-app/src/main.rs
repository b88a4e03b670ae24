// File: agent-app/src/main.rs
use agent_app::{create_router, AgentAppConfig, AppState, LocalMockClient};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    fixture_common::init_logging("agent_app")?;

    info!("Starting agent app");

    let config = AgentAppConfig::from_env().await?;

    let client = Arc::new(LocalMockClient::new(config.mock_client.clone()));
    info!("Mock client initialized");

    let app = create_router(AppState::new(client, config.foo.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Agent app listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Agent app stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
