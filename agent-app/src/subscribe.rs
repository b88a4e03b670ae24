//! Adapts the callback-based `subscribe` into a one-shot future.

use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use crate::client::{MockClient, SubscribeListener, Topic};
use crate::errors::ClientError;

/// Subscribe to `topic` and resolve with the first value delivered.
///
/// Later deliveries to the same listener are ignored. If the client drops
/// the listener without ever calling it, resolves to `ClientError::Closed`.
pub async fn subscribe_once(client: &dyn MockClient, topic: Topic) -> Result<Value, ClientError> {
    let (tx, rx) = oneshot::channel();
    let slot = Mutex::new(Some(tx));

    let listener: SubscribeListener = Arc::new(move |value: Value| {
        let sender = slot.lock().ok().and_then(|mut slot| slot.take());
        if let Some(sender) = sender {
            let _ = sender.send(value);
        }
        false
    });

    let operation = format!("subscribe({})", topic.id);
    client.subscribe(topic, listener);

    rx.await.map_err(|_| ClientError::Closed { operation })
}
