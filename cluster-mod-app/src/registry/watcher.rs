//! Provider watcher
//!
//! Mirrors the providers published under one data id into the app-level
//! host list that `/getHosts` reads.

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use super::InMemoryRegistry;
use crate::config::HostEntry;
use crate::errors::RegistryError;
use crate::web::SharedHosts;

/// `host:port` of a provider descriptor, `None` if it does not parse.
pub fn provider_host(descriptor: &str) -> Option<String> {
    let url = Url::parse(descriptor).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

pub fn hosts_from_providers(providers: &[String]) -> Vec<HostEntry> {
    providers
        .iter()
        .filter_map(|descriptor| match provider_host(descriptor) {
            Some(host) => Some(HostEntry::new(host)),
            None => {
                warn!("Skipping unparseable provider: {}", descriptor);
                None
            }
        })
        .collect()
}

async fn apply(hosts: &SharedHosts, data_id: &str, providers: &[String]) {
    let entries = hosts_from_providers(providers);
    debug!("Provider list for '{}': {} hosts", data_id, entries.len());
    *hosts.write().await = Some(entries);
}

/// Subscribe to `data_id` and keep `hosts` current until the registry closes.
pub async fn spawn_provider_watcher(
    registry: Arc<InMemoryRegistry>,
    data_id: String,
    hosts: SharedHosts,
) -> Result<JoinHandle<()>, RegistryError> {
    let mut updates = registry.subscribe().await?;

    let existing = registry.providers(&data_id).await;
    if !existing.is_empty() {
        apply(&hosts, &data_id, &existing).await;
    }

    info!("Watching providers for '{}'", data_id);

    Ok(tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(update) if update.data_id == data_id => {
                    apply(&hosts, &data_id, &update.providers).await;
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Provider watcher lagged by {} updates, resyncing", skipped);
                    let current = registry.providers(&data_id).await;
                    apply(&hosts, &data_id, &current).await;
                }
                Err(RecvError::Closed) => {
                    info!("Registry closed, provider watcher for '{}' stopped", data_id);
                    break;
                }
            }
        }
    }))
}
