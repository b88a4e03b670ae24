use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber. `RUST_LOG` is honoured; the target crate
/// logs at info and the HTTP stack is kept quiet.
pub fn init_logging(crate_target: &str) -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("{}=info", crate_target).parse()?)
        .add_directive("fixture_common=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?);

    fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
