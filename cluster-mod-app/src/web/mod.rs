pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::{Config, HostEntry};
use crate::registry::RegistryClient;

/// App-level host list (`app.val`); `None` until seeded or first published
pub type SharedHosts = Arc<RwLock<Option<Vec<HostEntry>>>>;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub options: Arc<Config>,
    pub val: SharedHosts,
    pub registry_client: Arc<dyn RegistryClient>,
}

impl AppState {
    pub fn new(options: Arc<Config>, registry_client: Arc<dyn RegistryClient>) -> Self {
        let val = Arc::new(RwLock::new(options.val.clone()));
        Self {
            options,
            val,
            registry_client,
        }
    }
}
