//! Payloads returned by the backend resource endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Describes one profile type the backend can serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTypeMessage {
    /// Full identifier, as used in a query target's `profileTypeId`.
    /// Empty when the backend left it out.
    #[serde(
        rename = "ID",
        alias = "id",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    /// Human readable name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Sample and period details the backend attaches, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Series known to the backend.
///
/// The layout is backend-defined, so the payload is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesMessage(pub Value);

impl SeriesMessage {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_type_from_backend_payload() {
        let message: ProfileTypeMessage = serde_json::from_value(json!({
            "ID": "process_cpu:cpu:nanoseconds:cpu:nanoseconds",
            "name": "process_cpu",
            "sample_type": "cpu",
            "sample_unit": "nanoseconds"
        }))
        .unwrap();

        assert_eq!(message.id, "process_cpu:cpu:nanoseconds:cpu:nanoseconds");
        assert_eq!(message.name, "process_cpu");
        assert_eq!(message.extra.get("sample_unit"), Some(&json!("nanoseconds")));
    }

    #[test]
    fn test_profile_type_without_id() {
        let message: ProfileTypeMessage = serde_json::from_value(json!({
            "name": "process_cpu",
            "sample_type": "cpu"
        }))
        .unwrap();

        assert_eq!(message.id, "");
        assert_eq!(message.name, "process_cpu");
    }

    #[test]
    fn test_profile_type_serializes_like_backend() {
        let raw = json!({
            "ID": "process_cpu:cpu:nanoseconds:cpu:nanoseconds",
            "name": "process_cpu",
            "period_type": "cpu"
        });
        let message: ProfileTypeMessage = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&message).unwrap(), raw);

        let sparse = json!({ "sample_type": "cpu" });
        let message: ProfileTypeMessage = serde_json::from_value(sparse.clone()).unwrap();
        assert_eq!(serde_json::to_value(&message).unwrap(), sparse);
    }

    #[test]
    fn test_profile_type_accepts_lowercase_id() {
        let message: ProfileTypeMessage =
            serde_json::from_value(json!({ "id": "memory", "name": "memory" })).unwrap();
        assert_eq!(message.id, "memory");
    }

    #[test]
    fn test_series_message_is_opaque() {
        let raw = json!([{ "labels": [{ "name": "app", "value": "web" }] }]);
        let message: SeriesMessage = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(message.into_inner(), raw);
    }
}
