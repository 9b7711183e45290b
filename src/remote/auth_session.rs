use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::http_client::rejection_detail;
use super::*;

/// HTTP Basic credential; the token is `base64("user:pass")`.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredential {
    username: String,
    token: String,
}

impl BasicCredential {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            token: STANDARD.encode(format!("{}:{}", username, password)),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn header_value(&self) -> String {
        format!("Basic {}", self.token)
    }
}

impl fmt::Debug for BasicCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredential")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Accepted,
    Rejected {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
}

/// Detail the sign-up server sends for an unknown activity.
pub(crate) const UNKNOWN_ACTIVITY_DETAIL: &str = "Activity not found";

/// The probe signs up to an activity that does not exist; the server checks
/// credentials first, so its own unknown-activity 404 means the credential
/// passed. Any other 404 (wrong base URL, proxy) is a rejection.
pub(crate) fn probe_accepts(status: reqwest::StatusCode, detail: Option<&str>) -> bool {
    status.is_success()
        || (status == reqwest::StatusCode::NOT_FOUND && detail == Some(UNKNOWN_ACTIVITY_DETAIL))
}

impl ActivityClient {
    pub fn probe_credential(&self, credential: &BasicCredential) -> ClientResult<ProbeOutcome> {
        let url = self.endpoint(&["activities", "test", "signup"], Some(&self.probe_email))?;
        let req = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, credential.header_value());
        let resp = self.send(req, "login probe")?;

        let status = resp.status();
        if status.is_success() {
            return Ok(ProbeOutcome::Accepted);
        }
        let detail = rejection_detail(resp);
        if probe_accepts(status, detail.as_deref()) {
            return Ok(ProbeOutcome::Accepted);
        }
        Ok(ProbeOutcome::Rejected { status, detail })
    }
}

#[cfg(test)]
#[path = "../tests/remote/auth_session_tests.rs"]
mod tests;
