//! The Fire datasource.
//!
//! [`FireDataSource`] sits between the host's query pipeline and the
//! backend. It gates queries on target validity and forwards resource
//! lookups to an injected [`ResourceTransport`]. It keeps no state of its
//! own, so one instance can serve many concurrent callers.

use futures::future;
use futures::stream::{self, StreamExt};
use tracing::{debug, instrument};

use super::transport::{QueryStream, ResourceTransport, TransportError, TransportResult};
use crate::domains::query::{QueryRequest, QueryResponse, has_valid_target};
use crate::domains::resources::{
    LabelNamesResource, ProfileTypeMessage, ProfileTypesResource, ResourceDefinition,
    SeriesMessage, SeriesResource,
};

#[cfg(feature = "http")]
use super::{
    config::Config,
    error::Result,
    transport::HttpTransport,
};

/// Datasource adapter over a backend transport.
#[derive(Debug, Clone)]
pub struct FireDataSource<T> {
    transport: T,
}

impl<T: ResourceTransport> FireDataSource<T> {
    /// Create a datasource backed by `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a query request.
    ///
    /// When no target names a profile type the backend is not contacted and
    /// the stream yields a single empty response. Otherwise the whole
    /// request, unconfigured targets included, goes to the transport and its
    /// stream is returned as-is.
    #[instrument(skip(self, request), fields(targets = request.targets.len()))]
    pub fn query(&self, request: QueryRequest) -> QueryStream {
        if !has_valid_target(&request.targets) {
            debug!("No target has a profile type, skipping backend call");
            return stream::once(future::ready(Ok(QueryResponse::empty()))).boxed();
        }

        debug!("Forwarding query to backend");
        self.transport.query(request)
    }

    /// Fetch the profile types the backend can serve.
    pub async fn profile_types(&self) -> TransportResult<Vec<ProfileTypeMessage>> {
        self.fetch::<ProfileTypesResource>().await
    }

    /// Fetch every series known to the backend.
    pub async fn series(&self) -> TransportResult<SeriesMessage> {
        self.fetch::<SeriesResource>().await
    }

    /// Fetch all label names, in backend order.
    pub async fn label_names(&self) -> TransportResult<Vec<String>> {
        self.fetch::<LabelNamesResource>().await
    }

    /// Fetch a resource and decode its payload.
    ///
    /// Transport failures are returned unchanged.
    pub async fn fetch<R: ResourceDefinition>(&self) -> TransportResult<R::Output> {
        let params = R::params();
        debug!(resource = R::NAME, "Fetching resource: {}", R::DESCRIPTION);

        let payload = self.transport.fetch_resource(R::NAME, &params).await?;
        serde_json::from_value(payload).map_err(|e| TransportError::decode(R::NAME, e))
    }
}

#[cfg(feature = "http")]
impl FireDataSource<HttpTransport> {
    /// Build an HTTP-backed datasource from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.transport.clone(), &config.credentials)?;
        Ok(Self::new(transport))
    }
}
