//! Registry client interface and provider registrations.
//!
//! - `memory` - in-process registry used by the binary
//! - `watcher` - keeps the app-level host list in sync with published providers

pub mod memory;
pub mod watcher;

pub use memory::{InMemoryRegistry, ProviderUpdate, PublishedRecord};
pub use watcher::spawn_provider_watcher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::registry::{DATA_ID, PROVIDER_PORT, PROVIDER_QUERY};
use crate::errors::RegistryError;

/// Payload of a registry publish: `{ dataId, publishData }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub data_id: String,
    pub publish_data: String,
}

impl Registration {
    /// Registration of a demo provider listening on `address`.
    pub fn provider(address: &str) -> Self {
        Self {
            data_id: DATA_ID.to_string(),
            publish_data: provider_url(address),
        }
    }
}

/// `dubbo://{address}:20880/demo.DemoService?...`
pub fn provider_url(address: &str) -> String {
    format!(
        "dubbo://{}:{}/{}?{}",
        address, PROVIDER_PORT, DATA_ID, PROVIDER_QUERY
    )
}

#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn publish(&self, registration: Registration) -> Result<(), RegistryError>;
}
