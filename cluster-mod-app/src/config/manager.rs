use super::Config;
use std::io::ErrorKind;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::constants::{env, DEFAULT_CONFIG_PATH};
use crate::errors::ConfigError;

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_path: &str) -> Result<Self, ConfigError> {
        let config = Self::load_configuration(config_path).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    /// Load from the path in `CLUSTER_APP_CONFIG`, or the default location.
    pub async fn from_env() -> Result<Self, ConfigError> {
        let path =
            std::env::var(env::CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::new(&path).await
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_path: &str) -> Result<Config, ConfigError> {
        let mut config: Config = match fs::read_to_string(config_path).await {
            Ok(content) => {
                debug!("Loading config: {}", config_path);
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: config_path.to_string(),
                    reason: e.to_string(),
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Config file {} not found - using defaults", config_path);
                Config::default()
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: config_path.to_string(),
                    reason: e.to_string(),
                })
            }
        };

        if let Ok(port) = std::env::var(env::PORT) {
            config.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                field: env::PORT.to_string(),
                reason: format!("'{}': {}", port, e),
            })?;
        }

        if config.watch_data_id.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "watch_data_id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        info!(
            "Loaded config: {}:{}, cluster port {:?}, {} seeded hosts, watching '{}'",
            config.host,
            config.port,
            config.cluster_port,
            config.val.as_ref().map(Vec::len).unwrap_or(0),
            config.watch_data_id
        );

        Ok(config)
    }
}
