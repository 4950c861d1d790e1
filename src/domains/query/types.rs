//! Query request and response types exchanged with the host pipeline.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single series frame returned by the backend.
///
/// Frames are passed through untouched, so they stay as raw JSON.
pub type DataFrame = Value;

fn default_label_selector() -> String {
    "{}".to_string()
}

/// A query target, built by the host for each panel query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Identifier the host uses to match results back to the panel query.
    #[serde(default)]
    pub ref_id: String,

    /// Which kind of profiling data to query, e.g. `process_cpu:cpu:nanoseconds:cpu:nanoseconds`.
    /// Empty or missing means the target has not been configured yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type_id: Option<String>,

    /// Label selector restricting the queried series.
    #[serde(default = "default_label_selector")]
    pub label_selector: String,

    /// Backend-specific query type (e.g. `profile`, `metrics`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,

    /// Any other fields set by the host. Forwarded verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            ref_id: String::new(),
            profile_type_id: None,
            label_selector: default_label_selector(),
            query_type: None,
            extra: Map::new(),
        }
    }
}

impl Query {
    /// Create an unconfigured target with the given ref id.
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            ..Default::default()
        }
    }

    /// Set the profile type identifier.
    pub fn with_profile_type(mut self, profile_type_id: impl Into<String>) -> Self {
        self.profile_type_id = Some(profile_type_id.into());
        self
    }

    /// Set the label selector.
    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = selector.into();
        self
    }

    /// Whether the target names a profile type.
    ///
    /// Only a missing or empty identifier counts as unconfigured; any other
    /// string, whitespace included, is accepted.
    pub fn is_configured(&self) -> bool {
        self.profile_type_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}

/// Time range covered by a query request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// The range ending now and spanning `span`.
    ///
    /// Returns `None` for a negative span or one reaching past the earliest
    /// representable time.
    pub fn last(span: Duration) -> Option<Self> {
        if span < Duration::zero() {
            return None;
        }
        let to = Utc::now();
        let from = to.checked_sub_signed(span)?;
        Some(Self { from, to })
    }

    /// Start of the range in epoch milliseconds.
    pub fn from_ms(&self) -> i64 {
        self.from.timestamp_millis()
    }

    /// End of the range in epoch milliseconds.
    pub fn to_ms(&self) -> i64 {
        self.to.timestamp_millis()
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        let to = Utc::now();
        Self {
            from: to - Duration::hours(1),
            to,
        }
    }
}

/// A query request issued by the host for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    pub range: TimeRange,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<u64>,

    /// Targets in panel order.
    pub targets: Vec<Query>,
}

impl QueryRequest {
    /// Create a request over `range` for the given targets.
    pub fn new(range: TimeRange, targets: Vec<Query>) -> Self {
        Self {
            request_id: None,
            range,
            interval_ms: None,
            max_data_points: None,
            targets,
        }
    }
}

/// Result of a query request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Vec<DataFrame>,
}

impl QueryResponse {
    /// A response carrying no series.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(data: Vec<DataFrame>) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
