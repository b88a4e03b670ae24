use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/agent-app.toml";

/// Key passed to `getData`, `getDataGenerator` and `saveAsync`
pub const DATA_KEY: &str = "hello";

/// Value written by `/save`
pub const SAVE_VALUE: &str = "node";

/// Topic id used by both subscribes in `/sub`
pub const SUBSCRIBE_TOPIC_ID: &str = "foo";

/// Pause between the two subscribes in `/sub`
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1000);

pub mod env {
    pub const CONFIG_PATH: &str = "AGENT_APP_CONFIG";
    pub const PORT: &str = "AGENT_APP_PORT";
}

pub mod body {
    pub const OK: &str = "ok";
    pub const TIMEOUT: &str = "timeout";
}
