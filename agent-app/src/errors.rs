//! Error types for the agent app
//!
//! Mock client calls either resolve with a value or reject with a `ClientError`.

use std::fmt;

/// Rejection reasons from the mock client
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The remote side rejected the call. Displays as the bare message.
    Rejected { message: String },

    /// No response within the client's response timeout
    Timeout { operation: String, after_ms: u64 },

    /// The callback or channel was dropped before a value arrived
    Closed { operation: String },
}

impl ClientError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ClientError::Rejected {
            message: message.into(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Rejected { message } => write!(f, "{}", message),
            ClientError::Timeout {
                operation,
                after_ms,
            } => {
                write!(
                    f,
                    "Operation '{}' timed out after {}ms",
                    operation, after_ms
                )
            }
            ClientError::Closed { operation } => {
                write!(f, "Operation '{}' closed before a value arrived", operation)
            }
        }
    }
}

impl std::error::Error for ClientError {}
