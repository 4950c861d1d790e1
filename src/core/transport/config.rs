//! Transport configuration types.

use serde::{Deserialize, Serialize};

const DEFAULT_URL: &str = "http://localhost:3000";
const DEFAULT_UID: &str = "fire";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Base URL of the host API.
    #[serde(default = "default_url")]
    pub url: String,

    /// UID of the datasource instance whose resources are queried.
    #[serde(default = "default_uid")]
    pub uid: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_uid() -> String {
    DEFAULT_UID.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            uid: default_uid(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TransportConfig {
    /// Create a config for the given host URL and datasource UID.
    pub fn new(url: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let url = std::env::var("FIRE_DATASOURCE_URL").unwrap_or_else(|_| default_url());
        let uid = std::env::var("FIRE_DATASOURCE_UID").unwrap_or_else(|_| default_uid());
        let timeout_secs = std::env::var("FIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            url,
            uid,
            timeout_secs,
        }
    }

    fn base(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// URL of a named resource on the configured datasource.
    pub fn resource_url(&self, name: &str) -> String {
        format!(
            "{}/api/datasources/uid/{}/resources/{}",
            self.base(),
            self.uid,
            name
        )
    }

    /// URL of the query endpoint.
    pub fn query_url(&self) -> String {
        format!("{}/api/ds/query", self.base())
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("datasource {} at {}", self.uid, self.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.url, "http://localhost:3000");
        assert_eq!(config.uid, "fire");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_resource_url_trims_trailing_slash() {
        let config = TransportConfig::new("https://grafana.example.com/", "abc123");
        assert_eq!(
            config.resource_url("labelNames"),
            "https://grafana.example.com/api/datasources/uid/abc123/resources/labelNames"
        );
        assert_eq!(
            config.query_url(),
            "https://grafana.example.com/api/ds/query"
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"url": "http://grafana:3000"}"#).unwrap();
        assert_eq!(config.url, "http://grafana:3000");
        assert_eq!(config.uid, "fire");
        assert_eq!(config.timeout_secs, 30);
    }
}
