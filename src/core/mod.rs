//! Core module containing shared infrastructure components.
//!
//! This module provides the datasource itself along with configuration,
//! error handling and the transport abstraction it is built on.

pub mod config;
pub mod datasource;
pub mod error;
pub mod transport;

pub use config::{Config, CredentialsConfig, LoggingConfig};
pub use datasource::FireDataSource;
pub use error::{Error, Result};
pub use transport::{
    InMemoryTransport, QueryStream, RecordedCall, ResourceTransport, TransportConfig,
    TransportError, TransportResult,
};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
