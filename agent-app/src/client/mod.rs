//! Mock client interface consumed by the route handlers.
//!
//! The handlers only ever see `Arc<dyn MockClient>`; the binary wires in
//! [`LocalMockClient`], tests wire in scripted fakes.

pub mod local;

pub use local::LocalMockClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::ClientError;

/// Subscription target, e.g. `{ "id": "foo" }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
}

impl Topic {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Invoked with every value delivered on a topic. Returns `false` once it
/// wants no further deliveries, after which the client may drop it.
pub type SubscribeListener = Arc<dyn Fn(Value) -> bool + Send + Sync>;

#[async_trait]
pub trait MockClient: Send + Sync {
    async fn get_data(&self, key: &str) -> Result<Value, ClientError>;

    async fn get_data_generator(&self, key: &str) -> Result<Value, ClientError>;

    async fn get_error(&self) -> Result<Value, ClientError>;

    /// Register `listener` on `topic`. Delivery happens through the
    /// listener, possibly before this returns.
    fn subscribe(&self, topic: Topic, listener: SubscribeListener);

    async fn save_async(&self, key: &str, value: &str) -> Result<(), ClientError>;

    async fn get_timeout(&self) -> Result<Value, ClientError>;
}
