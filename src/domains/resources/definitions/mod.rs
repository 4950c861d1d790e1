//! Resource definitions module.
//!
//! Each backend resource endpoint is defined in its own file with:
//! - The resource name used on the wire
//! - The parameters sent with every call
//! - The payload type it decodes into
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `label_values.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Add a convenience method on `FireDataSource`

mod label_names;
mod profile_types;
mod series;

pub use label_names::LabelNamesResource;
pub use profile_types::ProfileTypesResource;
pub use series::SeriesResource;

use serde::de::DeserializeOwned;

use super::params::ResourceParams;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The resource name as the backend routes it.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// Payload the resource decodes into.
    type Output: DeserializeOwned + Send;

    /// Parameters sent with every call. None by default.
    fn params() -> ResourceParams {
        ResourceParams::default()
    }
}
