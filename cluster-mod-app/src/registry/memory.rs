use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use super::{Registration, RegistryClient};
use crate::constants::registry::UPDATE_CHANNEL_CAPACITY;
use crate::errors::RegistryError;

#[derive(Debug, Clone, Serialize)]
pub struct PublishedRecord {
    pub registration: Registration,
    pub published_at: DateTime<Utc>,
}

/// Full provider list for a data id after a publish
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderUpdate {
    pub data_id: String,
    pub providers: Vec<String>,
}

/// Registry kept in process memory. Publishing the same descriptor twice
/// refreshes its timestamp instead of adding a duplicate.
pub struct InMemoryRegistry {
    records: RwLock<HashMap<String, Vec<PublishedRecord>>>,
    updates: RwLock<Option<broadcast::Sender<ProviderUpdate>>>,
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            records: RwLock::new(HashMap::new()),
            updates: RwLock::new(Some(tx)),
        }
    }

    pub async fn subscribe(&self) -> Result<broadcast::Receiver<ProviderUpdate>, RegistryError> {
        self.updates
            .read()
            .await
            .as_ref()
            .map(broadcast::Sender::subscribe)
            .ok_or_else(closed)
    }

    pub async fn providers(&self, data_id: &str) -> Vec<String> {
        self.records
            .read()
            .await
            .get(data_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|record| record.registration.publish_data.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub async fn records(&self, data_id: &str) -> Vec<PublishedRecord> {
        self.records
            .read()
            .await
            .get(data_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Stop accepting publications. Subscribers see their channel close.
    pub async fn close(&self) {
        if self.updates.write().await.take().is_some() {
            info!("Registry closed");
        }
    }
}

fn closed() -> RegistryError {
    RegistryError::Unavailable {
        reason: "registry closed".to_string(),
    }
}

#[async_trait]
impl RegistryClient for InMemoryRegistry {
    async fn publish(&self, registration: Registration) -> Result<(), RegistryError> {
        if registration.data_id.trim().is_empty() {
            return Err(RegistryError::InvalidRegistration {
                reason: "data id must not be empty".to_string(),
            });
        }

        let updates = self.updates.read().await;
        let sender = updates.as_ref().ok_or_else(closed)?;

        let data_id = registration.data_id.clone();
        let published_at = Utc::now();
        let providers: Vec<String> = {
            let mut records = self.records.write().await;
            let entries = records.entry(data_id.clone()).or_default();
            if let Some(previous) = entries
                .iter()
                .find(|record| record.registration.publish_data == registration.publish_data)
            {
                debug!(
                    "Refreshing provider first published at {}",
                    previous.published_at.to_rfc3339()
                );
            }
            entries.retain(|record| record.registration.publish_data != registration.publish_data);
            entries.push(PublishedRecord {
                registration,
                published_at,
            });
            entries
                .iter()
                .map(|record| record.registration.publish_data.clone())
                .collect()
        };

        info!(
            "Published provider for '{}' at {} ({} total)",
            data_id,
            published_at.to_rfc3339(),
            providers.len()
        );

        // Nobody listening is not an error
        if sender.send(ProviderUpdate { data_id, providers }).is_err() {
            debug!("No registry subscribers");
        }
        Ok(())
    }
}
