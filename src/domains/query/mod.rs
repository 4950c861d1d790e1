//! Query domain module.
//!
//! Types the host pipeline sends and receives on the query path, and the
//! target filter that gates whether a request reaches the backend.
//!
//! - `types.rs` - query targets, requests and responses
//! - `filter.rs` - target validity checks

mod filter;
mod types;

pub use filter::{has_valid_target, valid_targets};
pub use types::{DataFrame, Query, QueryRequest, QueryResponse, TimeRange};
