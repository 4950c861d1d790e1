//! Error types and handling for the datasource client.
//!
//! Backend failures keep their own [`TransportError`] type so they can be
//! returned to callers unchanged. This module wraps them, together with
//! configuration and serialization failures, for code that wants a single error type.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for datasource operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A backend call failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
