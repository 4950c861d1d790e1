//! Domains module containing business logic organized by bounded contexts.
//!
//! - **query**: targets, requests and responses on the query path
//! - **resources**: named backend lookups used by query editors

pub mod query;
pub mod resources;
