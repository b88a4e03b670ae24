//! In-process mock client
//!
//! Backs the binary with a key/value store and per-topic listener lists so
//! every route has something real to talk to.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{MockClient, SubscribeListener, Topic};
use crate::config::MockClientConfig;
use crate::errors::ClientError;

#[derive(Default)]
struct TopicState {
    current: Option<Value>,
    listeners: Vec<SubscribeListener>,
}

pub struct LocalMockClient {
    config: MockClientConfig,
    store: RwLock<HashMap<String, Value>>,
    topics: Mutex<HashMap<String, TopicState>>,
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Topic table mutex poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

impl LocalMockClient {
    pub fn new(config: MockClientConfig) -> Self {
        let store = RwLock::new(config.data.clone());
        let topics = config
            .topics
            .iter()
            .map(|(id, value)| {
                (
                    id.clone(),
                    TopicState {
                        current: Some(value.clone()),
                        listeners: Vec::new(),
                    },
                )
            })
            .collect();

        Self {
            config,
            store,
            topics: Mutex::new(topics),
        }
    }

    /// Set the topic's value and deliver it to every registered listener.
    /// Listeners that return `false` are dropped. Returns the number of
    /// listeners notified.
    pub fn publish(&self, topic: &Topic, value: Value) -> usize {
        let listeners = {
            let mut topics = lock_or_recover(&self.topics);
            let state = topics.entry(topic.id.clone()).or_default();
            state.current = Some(value.clone());
            std::mem::take(&mut state.listeners)
        };
        let notified = listeners.len();

        // Listeners run outside the lock so they may subscribe again.
        let mut kept: Vec<SubscribeListener> = listeners
            .into_iter()
            .filter(|listener| listener(value.clone()))
            .collect();

        {
            let mut topics = lock_or_recover(&self.topics);
            let state = topics.entry(topic.id.clone()).or_default();
            kept.append(&mut state.listeners);
            state.listeners = kept;
        }

        debug!(
            "Published to topic '{}': {} listeners",
            topic.id, notified
        );
        notified
    }

    pub fn listener_count(&self, topic: &Topic) -> usize {
        lock_or_recover(&self.topics)
            .get(&topic.id)
            .map(|state| state.listeners.len())
            .unwrap_or(0)
    }

    pub async fn stored(&self, key: &str) -> Option<Value> {
        self.store.read().await.get(key).cloned()
    }
}

#[async_trait]
impl MockClient for LocalMockClient {
    async fn get_data(&self, key: &str) -> Result<Value, ClientError> {
        Ok(self.stored(key).await.unwrap_or(Value::Null))
    }

    async fn get_data_generator(&self, key: &str) -> Result<Value, ClientError> {
        tokio::task::yield_now().await;
        Ok(self.stored(key).await.unwrap_or(Value::Null))
    }

    async fn get_error(&self) -> Result<Value, ClientError> {
        Err(ClientError::rejected(self.config.error_message.clone()))
    }

    fn subscribe(&self, topic: Topic, listener: SubscribeListener) {
        let current = lock_or_recover(&self.topics)
            .get(&topic.id)
            .and_then(|state| state.current.clone());

        if let Some(value) = current {
            if !listener(value) {
                debug!("Subscribed to topic '{}': done on first delivery", topic.id);
                return;
            }
        }

        lock_or_recover(&self.topics)
            .entry(topic.id.clone())
            .or_default()
            .listeners
            .push(listener);
        debug!("Subscribed to topic '{}'", topic.id);
    }

    async fn save_async(&self, key: &str, value: &str) -> Result<(), ClientError> {
        if self.config.save_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.save_latency_ms)).await;
        }
        self.store
            .write()
            .await
            .insert(key.to_string(), Value::String(value.to_string()));
        debug!("Saved key '{}'", key);
        Ok(())
    }

    async fn get_timeout(&self) -> Result<Value, ClientError> {
        let deadline = Duration::from_millis(self.config.response_timeout_ms);
        let work = tokio::time::sleep(Duration::from_millis(self.config.slow_operation_ms));

        match tokio::time::timeout(deadline, work).await {
            Ok(()) => Ok(Value::String("done".to_string())),
            Err(_) => Err(ClientError::Timeout {
                operation: "getTimeout".to_string(),
                after_ms: self.config.response_timeout_ms,
            }),
        }
    }
}
