use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROBE_EMAIL: &str = "test@test.com";

/// How a login form submission is turned into probe attempts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStrategy {
    /// One attempt with the username exactly as typed.
    #[default]
    Literal,
    /// Literal, then "mr."/"mrs." prefixed spellings of the lowercased name.
    HonorificVariants,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub login_strategy: LoginStrategy,

    #[serde(default = "default_probe_email")]
    pub probe_email: String,

    /// How long a status message stays visible.
    #[serde(default = "default_message_ttl_ms")]
    pub message_ttl_ms: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_probe_email() -> String {
    DEFAULT_PROBE_EMAIL.to_string()
}

fn default_message_ttl_ms() -> u64 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_strategy: LoginStrategy::default(),
            probe_email: default_probe_email(),
            message_ttl_ms: default_message_ttl_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self, crate::error::ClientError> {
        let bytes = std::fs::read(path).map_err(|source| crate::error::ClientError::Config {
            path: path.display().to_string(),
            reason: source.to_string(),
        })?;
        let config: Self =
            serde_json::from_slice(&bytes).map_err(|source| crate::error::ClientError::Config {
                path: path.display().to_string(),
                reason: source.to_string(),
            })?;
        config
            .validate()
            .map_err(|reason| crate::error::ClientError::Config {
                path: path.display().to_string(),
                reason: reason.to_string(),
            })?;
        Ok(config)
    }

    /// A zero TTL hides every status message; a zero timeout fails every request.
    fn validate(&self) -> Result<(), &'static str> {
        if self.message_ttl_ms == 0 {
            return Err("message_ttl_ms must be greater than 0");
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0");
        }
        Ok(())
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
