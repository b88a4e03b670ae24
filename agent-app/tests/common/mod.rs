//! Shared fixtures for agent app route tests:
//! - `ScriptedClient`, a mock client with canned outcomes that records calls
//! - helpers to drive the router in-process

// Not every test file uses every helper
#![allow(dead_code)]

use agent_app::{create_router, AppState, ClientError, MockClient, SubscribeListener, Topic};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;
use tower::ServiceExt;

/// How `saveAsync` settles
#[derive(Clone)]
pub enum SaveOutcome {
    Succeed,
    Fail(String),
    Never,
}

pub struct ScriptedClient {
    pub data: Result<Value, ClientError>,
    pub data_generator: Result<Value, ClientError>,
    pub error: Result<Value, ClientError>,
    pub timeout: Result<Value, ClientError>,
    pub save: SaveOutcome,
    /// Delay before a subscribe listener is called
    pub delivery_delay: Option<Duration>,
    /// Per-call delays, consumed in subscribe order before `delivery_delay`
    pub delivery_delays: Mutex<VecDeque<Duration>>,
    pub sub_values: Mutex<VecDeque<Value>>,
    pub subscribe_calls: Mutex<Vec<(Topic, Instant)>>,
    pub deliveries: Arc<Mutex<Vec<Instant>>>,
    pub saves: Mutex<Vec<(String, String)>>,
    pub save_called: Notify,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            data: Ok(Value::String("hello world".to_string())),
            data_generator: Ok(Value::String("hello generator".to_string())),
            error: Err(ClientError::rejected("boom")),
            timeout: Ok(Value::String("done".to_string())),
            save: SaveOutcome::Succeed,
            delivery_delay: None,
            delivery_delays: Mutex::new(VecDeque::new()),
            sub_values: Mutex::new(VecDeque::new()),
            subscribe_calls: Mutex::new(Vec::new()),
            deliveries: Arc::new(Mutex::new(Vec::new())),
            saves: Mutex::new(Vec::new()),
            save_called: Notify::new(),
        }
    }

    /// Values handed out by successive subscribes, in order
    pub fn with_subscribe_values(self, values: Vec<Value>) -> Self {
        *self.sub_values.lock().unwrap() = values.into();
        self
    }

    pub fn with_delivery_delays(self, delays: Vec<Duration>) -> Self {
        *self.delivery_delays.lock().unwrap() = delays.into();
        self
    }

    pub fn subscribe_instants(&self) -> Vec<Instant> {
        self.subscribe_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, at)| *at)
            .collect()
    }

    pub fn delivery_instants(&self) -> Vec<Instant> {
        self.deliveries.lock().unwrap().clone()
    }
}

impl Default for ScriptedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MockClient for ScriptedClient {
    async fn get_data(&self, _key: &str) -> Result<Value, ClientError> {
        self.data.clone()
    }

    async fn get_data_generator(&self, _key: &str) -> Result<Value, ClientError> {
        self.data_generator.clone()
    }

    async fn get_error(&self) -> Result<Value, ClientError> {
        self.error.clone()
    }

    fn subscribe(&self, topic: Topic, listener: SubscribeListener) {
        self.subscribe_calls
            .lock()
            .unwrap()
            .push((topic, Instant::now()));

        let Some(value) = self.sub_values.lock().unwrap().pop_front() else {
            return;
        };

        let delay = self
            .delivery_delays
            .lock()
            .unwrap()
            .pop_front()
            .or(self.delivery_delay);

        let deliveries = self.deliveries.clone();
        match delay {
            None => {
                deliveries.lock().unwrap().push(Instant::now());
                listener(value);
            }
            Some(delay) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    deliveries.lock().unwrap().push(Instant::now());
                    listener(value);
                });
            }
        }
    }

    async fn save_async(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.saves
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        self.save_called.notify_one();

        match &self.save {
            SaveOutcome::Succeed => Ok(()),
            SaveOutcome::Fail(message) => Err(ClientError::rejected(message.clone())),
            SaveOutcome::Never => std::future::pending().await,
        }
    }

    async fn get_timeout(&self) -> Result<Value, ClientError> {
        self.timeout.clone()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

pub fn state_with(client: Arc<dyn MockClient>, foo: Option<Value>) -> AppState {
    AppState::new(client, foo)
}

pub async fn get(state: AppState, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = create_router(state)
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"),
    }
}
