//! HTTP transport implementation.
//!
//! Sends resource calls and queries to the host API with reqwest.
//! Resource calls go to `/api/datasources/uid/{uid}/resources/{name}`,
//! queries are POSTed to `/api/ds/query`.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::{QueryStream, ResourceTransport, TransportConfig, TransportError, TransportResult};
use crate::core::config::CredentialsConfig;
use crate::domains::query::{QueryRequest, QueryResponse};
use crate::domains::resources::ResourceParams;

/// How requests authenticate against the host.
#[derive(Clone)]
enum Auth {
    None,
    Bearer(String),
    Basic {
        user: String,
        password: Option<String>,
    },
}

impl Auth {
    fn from_credentials(credentials: &CredentialsConfig) -> Self {
        if let Some(token) = &credentials.api_token {
            Self::Bearer(token.clone())
        } else if let Some(user) = &credentials.basic_auth_user {
            Self::Basic {
                user: user.clone(),
                password: credentials.basic_auth_password.clone(),
            }
        } else {
            Self::None
        }
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => builder,
            Self::Bearer(token) => builder.bearer_auth(token),
            Self::Basic { user, password } => builder.basic_auth(user, password.as_ref()),
        }
    }
}

/// HTTP transport handler.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<TransportConfig>,
    auth: Auth,
}

/// Body of a `/api/ds/query` response.
#[derive(Debug, Deserialize)]
struct DsQueryResponse {
    #[serde(default)]
    results: BTreeMap<String, DsQueryResult>,
}

/// Per-refId result inside a `/api/ds/query` response.
#[derive(Debug, Deserialize)]
struct DsQueryResult {
    #[serde(default)]
    frames: Vec<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new(config: TransportConfig, credentials: &CredentialsConfig) -> TransportResult<Self> {
        Url::parse(&config.url)
            .map_err(|e| TransportError::invalid_url(format!("{}: {}", config.url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!("HTTP transport ready for {}", config.description());

        Ok(Self {
            client,
            config: Arc::new(config),
            auth: Auth::from_credentials(credentials),
        })
    }

    #[instrument(skip(self, request), fields(targets = request.targets.len()))]
    async fn send_query(self, request: QueryRequest) -> TransportResult<QueryResponse> {
        let body = build_query_body(&request, &self.config.uid);
        let builder = self.client.post(self.config.query_url()).json(&body);

        let response = self.auth.apply(builder).send().await?;
        let decoded: DsQueryResponse = read_json(response, "query response").await?;

        collect_frames(&request, decoded)
    }
}

#[async_trait]
impl ResourceTransport for HttpTransport {
    fn query(&self, request: QueryRequest) -> QueryStream {
        let transport = self.clone();
        stream::once(async move { transport.send_query(request).await }).boxed()
    }

    #[instrument(skip(self, params))]
    async fn fetch_resource(&self, name: &str, params: &ResourceParams) -> TransportResult<Value> {
        let mut url = self.config.resource_url(name);
        if !params.is_empty() {
            let query = params
                .to_query_string()
                .map_err(|e| TransportError::invalid_url(format!("{}: {}", url, e)))?;
            url = format!("{}?{}", url, query);
        }
        debug!("GET {}", url);

        let response = self.auth.apply(self.client.get(url)).send().await?;
        read_json(response, name).await
    }
}

/// Read a response body, turning failures into transport errors.
async fn read_json<D: DeserializeOwned>(response: Response, what: &str) -> TransportResult<D> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("{} failed with HTTP {}", what, status);
        return Err(TransportError::status(status.as_u16(), body));
    }

    serde_json::from_str(&body).map_err(|e| TransportError::decode(what, e))
}

/// Build the JSON body for `/api/ds/query`.
///
/// Every target is sent, tagged with the datasource UID. Request-level
/// interval and data point limits fill in fields the target leaves unset.
fn build_query_body(request: &QueryRequest, uid: &str) -> Value {
    let queries: Vec<Value> = request
        .targets
        .iter()
        .map(|target| {
            let mut query = json!(target);
            if let Value::Object(fields) = &mut query {
                fields.insert("datasource".to_string(), json!({ "uid": uid }));
                if let Some(interval) = request.interval_ms {
                    fields
                        .entry("intervalMs")
                        .or_insert_with(|| json!(interval));
                }
                if let Some(max) = request.max_data_points {
                    fields
                        .entry("maxDataPoints")
                        .or_insert_with(|| json!(max));
                }
            }
            query
        })
        .collect();

    json!({
        "queries": queries,
        "from": request.range.from_ms().to_string(),
        "to": request.range.to_ms().to_string(),
    })
}

/// Flatten per-refId frames into a single response, in target order.
///
/// Results for refIds the request did not name are appended last.
fn collect_frames(
    request: &QueryRequest,
    mut response: DsQueryResponse,
) -> TransportResult<QueryResponse> {
    let mut ordered = Vec::with_capacity(response.results.len());
    for target in &request.targets {
        if let Some(result) = response.results.remove(&target.ref_id) {
            ordered.push((target.ref_id.clone(), result));
        }
    }
    ordered.extend(response.results);

    let mut data = Vec::new();
    for (ref_id, result) in ordered {
        if let Some(message) = result.error.filter(|m| !m.is_empty()) {
            return Err(TransportError::query(ref_id, message));
        }
        data.extend(result.frames);
    }

    Ok(QueryResponse::new(data))
}
