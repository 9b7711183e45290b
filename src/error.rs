//! Error taxonomy for client actions.
//!
//! Every variant is recoverable: the controller turns it into a status
//! message and the action ends there.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, broken body).
    #[error("network error during {action}")]
    Network {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode {action} response")]
    Decode {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Every login attempt was rejected.
    #[error("{reason}")]
    Auth { reason: String },

    #[error("not logged in (cannot {action})")]
    NotAuthenticated { action: &'static str },

    /// Non-2xx answer to a mutation.
    #[error("server rejected request ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    ServerRejected {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid URL {url}: {reason}")]
    Url { url: String, reason: String },

    #[error("invalid config {path}: {reason}")]
    Config { path: String, reason: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
