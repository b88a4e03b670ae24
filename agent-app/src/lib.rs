pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod subscribe;

pub use client::{LocalMockClient, MockClient, SubscribeListener, Topic};
pub use config::{AgentAppConfig, MockClientConfig};
pub use errors::ClientError;

use axum::{routing::get, Router};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn MockClient>,
    pub foo: Option<Value>,
}

impl AppState {
    pub fn new(client: Arc<dyn MockClient>, foo: Option<Value>) -> Self {
        Self { client, foo }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/getData", get(handlers::get_data))
        .route("/getDataGenerator", get(handlers::get_data_generator))
        .route("/getError", get(handlers::get_error))
        .route("/sub", get(handlers::sub))
        .route("/save", get(handlers::save))
        .route("/timeout", get(handlers::timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
