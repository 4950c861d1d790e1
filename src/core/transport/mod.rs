//! Transport layer for the datasource.
//!
//! A transport carries queries and resource calls to the backend. The
//! datasource only sees the [`ResourceTransport`] trait, so implementations
//! can be swapped freely:
//! - **HTTP**: talks to the host API with reqwest - feature: `http`
//! - **In-memory**: canned responses with a call log, always available

mod config;
mod error;
mod memory;

#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;

use crate::domains::query::{QueryRequest, QueryResponse};
use crate::domains::resources::ResourceParams;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use memory::{InMemoryTransport, RecordedCall};

#[cfg(feature = "http")]
pub use http::HttpTransport;

/// Stream of query responses.
///
/// Nothing is sent until the stream is first polled.
pub type QueryStream = BoxStream<'static, TransportResult<QueryResponse>>;

/// Capability to reach the backend.
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    /// Run a query request. Completion and error behaviour are defined by
    /// the implementation.
    fn query(&self, request: QueryRequest) -> QueryStream;

    /// Fetch the named resource and return its raw JSON payload.
    async fn fetch_resource(&self, name: &str, params: &ResourceParams) -> TransportResult<Value>;
}
