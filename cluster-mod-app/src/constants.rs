//! Fixed values used by the cluster app handlers and startup

pub const DEFAULT_CONFIG_PATH: &str = "config/cluster-mod-app.toml";

/// Registry publication constants
pub mod registry {
    /// Data id every provider is published under
    pub const DATA_ID: &str = "demo.DemoService";

    /// Port embedded in the provider descriptor
    pub const PROVIDER_PORT: u16 = 20880;

    /// Query string of the provider descriptor, after the service path
    pub const PROVIDER_QUERY: &str = "anyhost=true&application=demo-provider&dubbo=2.0.0&generic=false&interface=demo.DemoService&loadbalance=roundrobin&methods=sayHello&owner=william&pid=81281&side=provider&timestamp=1481613276143";

    /// Capacity of the provider update broadcast channel
    pub const UPDATE_CHANNEL_CAPACITY: usize = 64;
}

pub mod env {
    pub const CONFIG_PATH: &str = "CLUSTER_APP_CONFIG";
    pub const PORT: &str = "CLUSTER_APP_PORT";
}

pub mod body {
    pub const INDEX: &str = "hi cluster";
    pub const OK: &str = "ok";
}
