use std::fmt;

use reqwest::Url;

use crate::error::{ClientError, ClientResult};
use crate::model::ClientConfig;

mod http_client;

mod types;
pub use self::types::*;
mod activities;
mod auth_session;
pub use self::auth_session::{BasicCredential, ProbeOutcome};

/// Blocking HTTP client for the activity sign-up API.
pub struct ActivityClient {
    base_url: Url,
    probe_email: String,
    client: reqwest::blocking::Client,
}

impl ActivityClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|err| ClientError::Url {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Url {
                url: config.base_url.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent("activity-signup")
            .timeout(config.request_timeout())
            .build()
            .map_err(|source| ClientError::Network {
                action: "build http client",
                source,
            })?;
        Ok(Self {
            base_url,
            probe_email: config.probe_email.clone(),
            client,
        })
    }
}

impl fmt::Debug for ActivityClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityClient")
            .field("base_url", &self.base_url.as_str())
            .field("probe_email", &self.probe_email)
            .finish_non_exhaustive()
    }
}
