//! Client configuration for the NEST speech gateway
//!
//! Configuration can be loaded from a TOML file and/or environment variables.
//! The secret key is never embedded in source: it comes from `NEST_SECRET_KEY`
//! (the long-form recognition domain key from the CLOVA Speech console), a
//! config file, or an explicit value handed to the constructor.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Client configuration for the NEST gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Gateway endpoint, scheme optional (defaults to https)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer secret key presented on every call
    #[serde(default)]
    pub secret_key: String,

    /// Bound on channel establishment in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Optional per-call deadline in milliseconds; when unset the call waits
    /// for the transport default
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_endpoint() -> String {
    "https://clovaspeech-gw.ncloud.com:50051".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            secret_key: String::new(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the default gateway with the given secret
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ClientConfig =
            toml::from_str(&content).map_err(|e| Error::Config(format!("Parse error: {}", e)))?;
        Ok(config)
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();

        if let Ok(endpoint) = std::env::var("NEST_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(secret) = std::env::var("NEST_SECRET_KEY") {
            config.secret_key = secret;
        }
        if let Ok(timeout) = std::env::var("NEST_CONNECT_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                config.connect_timeout_ms = t;
            }
        }
        if let Ok(timeout) = std::env::var("NEST_REQUEST_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                config.request_timeout_ms = Some(t);
            }
        }

        config
    }

    /// Load configuration from file if it exists, otherwise from environment
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        if let Some(p) = path {
            if p.as_ref().exists() {
                tracing::debug!("loading NEST client config from {}", p.as_ref().display());
                return Self::from_file(p);
            }
        }
        Ok(Self::from_env())
    }

    /// Check that the configuration can produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::Config("gateway endpoint cannot be empty".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(Error::Config(
                "secret key is not set (NEST_SECRET_KEY)".to_string(),
            ));
        }
        if self.connect_timeout_ms == 0 {
            return Err(Error::Config(
                "connect_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://clovaspeech-gw.ncloud.com:50051");
        assert_eq!(config.connect_timeout_ms, 10_000);
        assert!(config.request_timeout_ms.is_none());
        assert!(config.secret_key.is_empty());
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
endpoint = "https://nest.example.com:50051"
secret_key = "test-secret"
connect_timeout_ms = 2500
request_timeout_ms = 30000
"#;

        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, "https://nest.example.com:50051");
        assert_eq!(config.secret_key, "test-secret");
        assert_eq!(config.connect_timeout_ms, 2500);
        assert_eq!(config.request_timeout_ms, Some(30_000));
    }

    #[test]
    fn test_config_from_toml_defaults() {
        let config: ClientConfig = toml::from_str(r#"secret_key = "abc""#).unwrap();
        assert_eq!(config.endpoint, "https://clovaspeech-gw.ncloud.com:50051");
        assert_eq!(config.connect_timeout_ms, 10_000);
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nest.toml");
        std::fs::write(&path, "secret_key = \"from-file\"\n").unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.secret_key, "from-file");
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let config = ClientConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let config = ClientConfig {
            endpoint: String::new(),
            ..ClientConfig::new("abc123")
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let config = ClientConfig::new("abc123");
        assert!(config.validate().is_ok());
    }
}
