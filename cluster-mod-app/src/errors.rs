//! Custom error types for the cluster app
//!
//! Configuration failures stop startup; registry failures only ever surface
//! in logs because publishing is detached from the request.

use std::fmt;

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    LoadFailed { path: String, reason: String },

    /// Configuration parsing error
    ParseError { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },
}

/// Registry error variants
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Registration rejected before publishing
    InvalidRegistration { reason: String },

    /// The registry is no longer accepting publications
    Unavailable { reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load '{}': {}", path, reason)
            }
            ConfigError::ParseError { path, reason } => {
                write!(f, "Failed to parse '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidRegistration { reason } => {
                write!(f, "Invalid registration: {}", reason)
            }
            RegistryError::Unavailable { reason } => {
                write!(f, "Registry unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for RegistryError {}
