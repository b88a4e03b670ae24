pub mod manager;
use serde::{Deserialize, Serialize};
pub use manager::ConfigManager;

use crate::constants::registry::DATA_ID;

/// Application options. `cluster_port` is what `/getClusterPort` reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cluster_port")]
    pub cluster_port: Option<u16>,
    /// Seed for the app-level host list, replaced by the provider watcher
    #[serde(default)]
    pub val: Option<Vec<HostEntry>>,
    #[serde(default = "default_watch_data_id")]
    pub watch_data_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub host: String,
}

impl HostEntry {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7002
}

fn default_cluster_port() -> Option<u16> {
    Some(17001)
}

fn default_watch_data_id() -> String {
    DATA_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cluster_port: default_cluster_port(),
            val: None,
            watch_data_id: default_watch_data_id(),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
