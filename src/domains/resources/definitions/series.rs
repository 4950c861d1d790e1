//! Series resource definition.

use super::ResourceDefinition;
use crate::domains::resources::messages::SeriesMessage;
use crate::domains::resources::params::ResourceParams;

/// Matcher selecting every series.
pub const MATCH_ALL: &str = "{}";

/// Lists the series known to the backend.
///
/// Always asks for every series; callers cannot narrow it with their own
/// matchers yet.
pub struct SeriesResource;

impl ResourceDefinition for SeriesResource {
    const NAME: &'static str = "series";
    const DESCRIPTION: &'static str = "Series matching the empty selector";

    type Output = SeriesMessage;

    fn params() -> ResourceParams {
        ResourceParams::new().with("matchers", [MATCH_ALL])
    }
}
