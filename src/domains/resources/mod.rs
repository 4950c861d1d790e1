//! Resources domain module.
//!
//! Resources are named lookups against the backend plugin API, separate from
//! the time-series query path. They feed query editors with profile types,
//! series and label names.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per resource endpoint
//! - `messages.rs` - Payload types returned by the endpoints
//! - `params.rs` - Query parameters attached to a resource call

pub mod definitions;
mod messages;
mod params;

pub use definitions::{
    LabelNamesResource, ProfileTypesResource, ResourceDefinition, SeriesResource,
};
pub use messages::{ProfileTypeMessage, SeriesMessage};
pub use params::ResourceParams;
