//! Query parameters attached to a resource call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named, multi-valued parameters for a resource call.
///
/// Each key may carry several values; on the wire they are sent as repeated
/// query keys (`matchers=a&matchers=b`). Keys are kept sorted so the encoded
/// form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceParams(BTreeMap<String, Vec<String>>);

impl ResourceParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `values` under `key`, appending to any existing values.
    pub fn with<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.0
            .entry(key.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Values stored under `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten into `(key, value)` pairs, one per value.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
            .collect()
    }

    /// Encode as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self.pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params() {
        let params = ResourceParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string().unwrap(), "");
    }

    #[test]
    fn test_match_all_matcher_encoding() {
        let params = ResourceParams::new().with("matchers", ["{}"]);
        assert_eq!(params.get("matchers"), Some(&["{}".to_string()][..]));
        assert_eq!(params.to_query_string().unwrap(), "matchers=%7B%7D");
    }

    #[test]
    fn test_repeated_keys() {
        let params = ResourceParams::new()
            .with("matchers", ["{a=\"1\"}"])
            .with("matchers", ["{b=\"2\"}"])
            .with("end", ["200"]);

        assert_eq!(
            params.pairs(),
            vec![
                ("end", "200"),
                ("matchers", "{a=\"1\"}"),
                ("matchers", "{b=\"2\"}"),
            ]
        );
    }
}
