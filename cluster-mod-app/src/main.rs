// File: cluster-mod-app/src/main.rs
use anyhow::Result;
use cluster_mod_app::registry::spawn_provider_watcher;
use cluster_mod_app::web::start_web_server;
use cluster_mod_app::{AppState, ConfigManager, InMemoryRegistry};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    fixture_common::init_logging("cluster_mod_app")?;

    info!("Starting cluster app");

    // Load configuration
    let config_manager = ConfigManager::from_env().await?;
    let config = config_manager.get_current_config();

    // Initialize registry client
    let registry = Arc::new(InMemoryRegistry::new());
    info!("Registry client initialized");

    let state = AppState::new(config.clone(), registry.clone());

    // Keep app.val in step with published providers
    let watcher = spawn_provider_watcher(
        registry.clone(),
        config.watch_data_id.clone(),
        state.val.clone(),
    )
    .await?;

    start_web_server(&config.bind_addr(), state, shutdown_signal()).await?;

    registry.close().await;
    if let Err(e) = watcher.await {
        error!("Provider watcher ended abnormally: {}", e);
    }

    info!("Cluster app stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
