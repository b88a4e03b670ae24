use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use tokio::fs;
use tracing::{info, warn};

use crate::constants::{env, DEFAULT_CONFIG_PATH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentAppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// App-level value echoed back by `/sub`
    #[serde(default = "default_foo")]
    pub foo: Option<Value>,
    #[serde(default)]
    pub mock_client: MockClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockClientConfig {
    #[serde(default = "default_data")]
    pub data: HashMap<String, Value>,
    #[serde(default = "default_error_message")]
    pub error_message: String,
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: u64,
    #[serde(default = "default_slow_operation_ms")]
    pub slow_operation_ms: u64,
    #[serde(default)]
    pub save_latency_ms: u64,
    // Initial value per topic id, delivered on subscribe
    #[serde(default = "default_topics")]
    pub topics: HashMap<String, Value>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7001
}

fn default_foo() -> Option<Value> {
    Some(Value::String("bar".to_string()))
}

fn default_data() -> HashMap<String, Value> {
    HashMap::from([(
        "hello".to_string(),
        Value::String("hello world".to_string()),
    )])
}

fn default_error_message() -> String {
    "mock error".to_string()
}

fn default_response_timeout_ms() -> u64 {
    3000
}

fn default_slow_operation_ms() -> u64 {
    5000
}

fn default_topics() -> HashMap<String, Value> {
    HashMap::from([("foo".to_string(), Value::String("bar".to_string()))])
}

impl Default for AgentAppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            foo: default_foo(),
            mock_client: MockClientConfig::default(),
        }
    }
}

impl Default for MockClientConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            error_message: default_error_message(),
            response_timeout_ms: default_response_timeout_ms(),
            slow_operation_ms: default_slow_operation_ms(),
            save_latency_ms: 0,
            topics: default_topics(),
        }
    }
}

impl AgentAppConfig {
    /// Load from the path in `AGENT_APP_CONFIG`, or the default location.
    pub async fn from_env() -> Result<Self> {
        let path =
            std::env::var(env::CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(&path).await
    }

    pub async fn load(path: &str) -> Result<Self> {
        let mut config: AgentAppConfig = match fs::read_to_string(path).await {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| anyhow!("Failed to parse config {}: {}", path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Config file {} not found - using defaults", path);
                AgentAppConfig::default()
            }
            Err(e) => return Err(anyhow!("Failed to read config {}: {}", path, e)),
        };

        config.apply_env_overrides()?;
        info!(
            "Configuration loaded: {}:{}, {} data keys, {} topics",
            config.host,
            config.port,
            config.mock_client.data.len(),
            config.mock_client.topics.len()
        );
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var(env::PORT) {
            self.port = port
                .parse()
                .map_err(|e| anyhow!("Invalid {} '{}': {}", env::PORT, port, e))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
