//! In-memory transport.
//!
//! Serves canned responses and records every call it receives. Stands in
//! for the backend in tests, or in hosts that want to stub it out.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::{QueryStream, ResourceTransport, TransportError, TransportResult};
use crate::domains::query::{QueryRequest, QueryResponse};
use crate::domains::resources::ResourceParams;

/// A call observed by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Query(QueryRequest),
    Resource { name: String, params: ResourceParams },
}

/// What a canned endpoint answers with.
#[derive(Debug, Clone)]
enum Outcome<T> {
    Respond(T),
    Fail(String),
}

impl<T: Clone> Outcome<T> {
    fn resolve(&self) -> TransportResult<T> {
        match self {
            Self::Respond(value) => Ok(value.clone()),
            Self::Fail(message) => Err(TransportError::connection(message.clone())),
        }
    }
}

/// Transport with canned responses.
///
/// Clones share the same call log, so a test can keep one handle and give
/// another to the datasource.
#[derive(Debug, Clone)]
pub struct InMemoryTransport {
    query: Arc<Outcome<QueryResponse>>,
    resources: Arc<HashMap<String, Outcome<Value>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTransport {
    /// Create a transport answering every query with an empty response.
    pub fn new() -> Self {
        Self {
            query: Arc::new(Outcome::Respond(QueryResponse::empty())),
            resources: Arc::new(HashMap::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer queries with `response`.
    pub fn with_query_response(mut self, response: QueryResponse) -> Self {
        self.query = Arc::new(Outcome::Respond(response));
        self
    }

    /// Fail queries with a connection error carrying `message`.
    pub fn with_query_failure(mut self, message: impl Into<String>) -> Self {
        self.query = Arc::new(Outcome::Fail(message.into()));
        self
    }

    /// Answer the resource `name` with `payload`.
    pub fn with_resource(mut self, name: impl Into<String>, payload: Value) -> Self {
        Arc::make_mut(&mut self.resources).insert(name.into(), Outcome::Respond(payload));
        self
    }

    /// Fail the resource `name` with a connection error carrying `message`.
    pub fn with_resource_failure(
        mut self,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.resources).insert(name.into(), Outcome::Fail(message.into()));
        self
    }

    /// Every call received so far, oldest first.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// Number of query calls received so far.
    pub async fn query_count(&self) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| matches!(c, RecordedCall::Query(_)))
            .count()
    }
}

#[async_trait]
impl ResourceTransport for InMemoryTransport {
    fn query(&self, request: QueryRequest) -> QueryStream {
        let outcome = self.query.clone();
        let calls = self.calls.clone();

        stream::once(async move {
            debug!("In-memory query with {} targets", request.targets.len());
            calls.lock().await.push(RecordedCall::Query(request));
            outcome.resolve()
        })
        .boxed()
    }

    async fn fetch_resource(&self, name: &str, params: &ResourceParams) -> TransportResult<Value> {
        self.calls.lock().await.push(RecordedCall::Resource {
            name: name.to_string(),
            params: params.clone(),
        });

        match self.resources.get(name) {
            Some(outcome) => outcome.resolve(),
            None => Err(TransportError::status(
                404,
                format!("resource not found: {}", name),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_resource_is_not_found() {
        let transport = InMemoryTransport::new();
        let err = transport
            .fetch_resource("missing", &ResourceParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::StatusError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_clones_share_call_log() {
        let transport = InMemoryTransport::new().with_resource("labelNames", json!(["app"]));
        let handle = transport.clone();

        let payload = transport
            .fetch_resource("labelNames", &ResourceParams::new())
            .await
            .unwrap();

        assert_eq!(payload, json!(["app"]));
        assert_eq!(
            handle.calls().await,
            vec![RecordedCall::Resource {
                name: "labelNames".to_string(),
                params: ResourceParams::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_query_is_recorded_only_when_polled() {
        let transport = InMemoryTransport::new();
        let request = QueryRequest::new(Default::default(), vec![]);

        let stream = transport.query(request.clone());
        assert_eq!(transport.query_count().await, 0);

        let responses: Vec<_> = stream.collect().await;
        assert_eq!(responses.len(), 1);
        assert_eq!(transport.calls().await, vec![RecordedCall::Query(request)]);
    }
}
