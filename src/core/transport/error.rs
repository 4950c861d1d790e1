//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request could not be completed (connect, timeout, body read).
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned HTTP {status}: {body}")]
    StatusError { status: u16, body: String },

    /// The payload did not match the expected shape.
    #[error("Failed to decode {what}: {source}")]
    DecodeError {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend reported an error for one query target.
    #[error("Query {ref_id} failed: {message}")]
    QueryError { ref_id: String, message: String },

    /// The configured backend URL is unusable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

impl TransportError {
    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::StatusError {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::DecodeError {
            what: what.into(),
            source,
        }
    }

    /// Create a query error.
    pub fn query(ref_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryError {
            ref_id: ref_id.into(),
            message: message.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = TransportError::status(502, "bad gateway");
        assert_eq!(err.to_string(), "Backend returned HTTP 502: bad gateway");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<String>>("{}").unwrap_err();
        let err = TransportError::decode("labelNames", source);
        assert!(err.to_string().starts_with("Failed to decode labelNames"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
