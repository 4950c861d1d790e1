//! Label names resource definition.

use super::ResourceDefinition;

/// Lists every label name, in backend order.
pub struct LabelNamesResource;

impl ResourceDefinition for LabelNamesResource {
    const NAME: &'static str = "labelNames";
    const DESCRIPTION: &'static str = "Label names present in the backend";

    type Output = Vec<String>;
}
