//! Test fixtures for cluster app route tests:
//! - `RecordingRegistry`, a registry client that reports every publish
//! - helpers to drive the router in-process

// Not every test file uses every helper
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use cluster_mod_app::{
    create_router, AppState, Config, HostEntry, Registration, RegistryClient, RegistryError,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Registry client that forwards each registration to a channel and then
/// settles with a fixed outcome
pub struct RecordingRegistry {
    tx: mpsc::UnboundedSender<Registration>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<Registration>>>,
    pub outcome: Result<(), RegistryError>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::with_outcome(Ok(()))
    }

    pub fn with_outcome(outcome: Result<(), RegistryError>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
            outcome,
        }
    }

    pub fn take_receiver(&self) -> mpsc::UnboundedReceiver<Registration> {
        self.rx
            .lock()
            .unwrap()
            .take()
            .expect("Receiver already taken")
    }
}

#[async_trait]
impl RegistryClient for RecordingRegistry {
    async fn publish(&self, registration: Registration) -> Result<(), RegistryError> {
        let _ = self.tx.send(registration);
        self.outcome.clone()
    }
}

/// Wait for the next registration, failing the test after a second
pub async fn next_registration(rx: &mut mpsc::UnboundedReceiver<Registration>) -> Registration {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("Timed out waiting for publish")
        .expect("Registry channel closed")
}

pub fn config_with(cluster_port: Option<u16>, val: Option<Vec<&str>>) -> Arc<Config> {
    Arc::new(Config {
        cluster_port,
        val: val.map(|hosts| hosts.into_iter().map(HostEntry::new).collect()),
        ..Config::default()
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub async fn send(state: AppState, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("Failed to build request");

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

pub async fn get(state: AppState, uri: &str) -> TestResponse {
    send(state, Method::GET, uri, None).await
}
