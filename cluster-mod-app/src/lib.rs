pub mod config;
pub mod constants;
pub mod errors;
pub mod registry;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigManager, HostEntry};
pub use errors::{ConfigError, RegistryError};
pub use registry::{InMemoryRegistry, Registration, RegistryClient};
pub use web::{create_router, AppState, SharedHosts};
