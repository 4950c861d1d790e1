//! Fire datasource client library.
//!
//! This crate connects a visualization host's query pipeline to the Fire
//! continuous profiling backend. It gates queries on whether any target names
//! a profile type and exposes the backend's resource endpoints (profile
//! types, series and label names).
//!
//! # Architecture
//!
//! - **core**: the datasource, configuration, error handling and transports
//! - **domains**: business types organized by bounded contexts
//!   - **query**: query targets, requests and responses
//!   - **resources**: resource definitions and their payloads
//!
//! # Example
//!
//! ```rust,no_run
//! use fire_datasource::{Config, FireDataSource, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let datasource = FireDataSource::<HttpTransport>::from_config(&config)?;
//!     let label_names = datasource.label_names().await?;
//!     println!("{:?}", label_names);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{
    Config, Error, FireDataSource, InMemoryTransport, QueryStream, ResourceTransport, Result,
    TransportError, TransportResult,
};
pub use domains::query::{Query, QueryRequest, QueryResponse, TimeRange};
pub use domains::resources::{ProfileTypeMessage, ResourceParams, SeriesMessage};

#[cfg(feature = "http")]
pub use core::HttpTransport;
