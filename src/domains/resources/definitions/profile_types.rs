//! Profile types resource definition.

use super::ResourceDefinition;
use crate::domains::resources::messages::ProfileTypeMessage;

/// Lists the profile types the backend has data for.
pub struct ProfileTypesResource;

impl ResourceDefinition for ProfileTypesResource {
    const NAME: &'static str = "profileTypes";
    const DESCRIPTION: &'static str = "Profile types available in the backend";

    type Output = Vec<ProfileTypeMessage>;
}
