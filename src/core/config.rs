//! Configuration management for the datasource client.
//!
//! Configuration is assembled from defaults and then overridden by
//! environment variables (a `.env` file is loaded first when present).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend location and timeouts.
    pub transport: TransportConfig,

    /// Credentials used against the host API.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load logging config from environment variables.
    pub fn from_env() -> Self {
        std::env::var("FIRE_LOG_LEVEL")
            .map(|level| Self { level })
            .unwrap_or_default()
    }
}

/// Credentials for the host API.
///
/// An API token takes precedence over basic auth when both are set.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Service account or API token, sent as a bearer token.
    pub api_token: Option<String>,

    /// Basic auth user name.
    pub basic_auth_user: Option<String>,

    /// Basic auth password.
    pub basic_auth_password: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("basic_auth_user", &self.basic_auth_user)
            .field(
                "basic_auth_password",
                &self.basic_auth_password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `FIRE_`, for example
    /// `FIRE_DATASOURCE_URL` or `FIRE_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self {
            transport: TransportConfig::from_env(),
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        if let Ok(token) = std::env::var("FIRE_API_TOKEN") {
            config.credentials.api_token = Some(token);
            info!("API token loaded from environment");
        }

        if let Ok(user) = std::env::var("FIRE_BASIC_AUTH_USER") {
            config.credentials.basic_auth_user = Some(user);
            config.credentials.basic_auth_password = std::env::var("FIRE_BASIC_AUTH_PASSWORD").ok();
        }

        if config.credentials.api_token.is_none() && config.credentials.basic_auth_user.is_none() {
            warn!(
                "No credentials configured. Set FIRE_API_TOKEN or FIRE_BASIC_AUTH_USER \
                 if the host requires authentication."
            );
        }

        config
    }

    /// Check that the configuration can be used to reach a backend.
    pub fn validate(&self) -> Result<()> {
        if self.transport.url.trim().is_empty() {
            return Err(Error::config("datasource URL is empty"));
        }
        if self.transport.uid.trim().is_empty() {
            return Err(Error::config("datasource UID is empty"));
        }
        if self.transport.timeout_secs == 0 {
            return Err(Error::config("timeout must be at least one second"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRE_DATASOURCE_URL", "https://grafana.internal");
            std::env::set_var("FIRE_DATASOURCE_UID", "profiles");
            std::env::set_var("FIRE_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.transport.url, "https://grafana.internal");
        assert_eq!(config.transport.uid, "profiles");
        assert_eq!(config.transport.timeout_secs, 5);
        unsafe {
            std::env::remove_var("FIRE_DATASOURCE_URL");
            std::env::remove_var("FIRE_DATASOURCE_UID");
            std::env::remove_var("FIRE_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRE_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.transport.timeout_secs, 30);
        unsafe {
            std::env::remove_var("FIRE_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_logging_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRE_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        unsafe {
            std::env::remove_var("FIRE_LOG_LEVEL");
        }
        assert_eq!(LoggingConfig::from_env().level, "info");
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FIRE_API_TOKEN", "glsa_test_token");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.api_token.as_deref(),
            Some("glsa_test_token")
        );
        unsafe {
            std::env::remove_var("FIRE_API_TOKEN");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_token: Some("super_secret_token".to_string()),
            basic_auth_user: Some("admin".to_string()),
            basic_auth_password: Some("hunter2".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(debug_str.contains("admin"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.transport.uid = String::new();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.transport.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
