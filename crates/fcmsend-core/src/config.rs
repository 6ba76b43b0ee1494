//! Configuration for fcmsend
//!
//! Values are layered: defaults, then an optional TOML file, then
//! `FCMSEND_*` environment variables. Command-line flags are applied last by
//! the binary.
//!
//! Example config:
//! ```toml
//! endpoint = "https://fcm.googleapis.com/fcm/send"
//! timeout_secs = 30
//!
//! [tls]
//! verify = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::{Error, Result, FCM_ENDPOINT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwarderConfig {
    /// Push endpoint the payload is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub tls: TlsConfig,
}

fn default_endpoint() -> String {
    FCM_ENDPOINT.to_string()
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            tls: TlsConfig::default(),
        }
    }
}

/// TLS settings for the outbound request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Verify the server certificate chain
    #[serde(default = "default_true")]
    pub verify: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self { verify: true }
    }
}

impl ForwarderConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))
    }

    /// Load from `path` when given, otherwise start from defaults, then
    /// overlay the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay `FCMSEND_*` variables resolved through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("FCMSEND_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = lookup("FCMSEND_TIMEOUT_SECS") {
            let secs = timeout.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("FCMSEND_TIMEOUT_SECS is not a number: {}", timeout))
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Some(verify) = lookup("FCMSEND_TLS_VERIFY") {
            self.tls.verify = parse_bool(&verify).ok_or_else(|| {
                Error::InvalidConfig(format!("FCMSEND_TLS_VERIFY is not a boolean: {}", verify))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::InvalidConfig("endpoint is empty".to_string()));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::InvalidConfig(format!("endpoint {}: {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "endpoint must be http or https, got {}",
                url.scheme()
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::InvalidConfig("timeout must be at least 1 second".to_string()));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ForwarderConfig::default();
        assert_eq!(config.endpoint, "https://fcm.googleapis.com/fcm/send");
        assert!(config.tls.verify);
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 15\n\n[tls]\nverify = false").unwrap();

        let config = ForwarderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, FCM_ENDPOINT);
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert!(!config.tls.verify);
    }

    #[test]
    fn test_from_file_missing() {
        let err = ForwarderConfig::from_file("/nonexistent/fcmsend.toml").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_apply_env() {
        let vars: HashMap<&str, &str> = [
            ("FCMSEND_ENDPOINT", "http://127.0.0.1:8080/fcm/send"),
            ("FCMSEND_TIMEOUT_SECS", "5"),
            ("FCMSEND_TLS_VERIFY", "off"),
        ]
        .into_iter()
        .collect();

        let mut config = ForwarderConfig::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:8080/fcm/send");
        assert_eq!(config.timeout_secs, Some(5));
        assert!(!config.tls.verify);
    }

    #[test]
    fn test_apply_env_rejects_garbage() {
        let mut config = ForwarderConfig::default();
        let result = config.apply_env(|key| match key {
            "FCMSEND_TLS_VERIFY" => Some("maybe".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate() {
        let mut config = ForwarderConfig::default();
        config.endpoint = "ftp://example.com/send".to_string();
        assert!(config.validate().is_err());

        config.endpoint = String::new();
        assert!(config.validate().is_err());

        config.endpoint = "http://localhost:1234/fcm/send".to_string();
        config.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config.timeout_secs = Some(1);
        assert!(config.validate().is_ok());
    }
}
