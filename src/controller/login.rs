use super::*;

use crate::remote::{BasicCredential, ProbeOutcome};
use crate::session::login_candidates;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

impl ActivityController {
    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
        self.login_error = None;
    }

    pub fn login_open(&self) -> bool {
        self.login_open
    }

    /// Inline message shown inside the login modal.
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Probes each candidate username in order; the first accepted one
    /// becomes the session. Returns the display name.
    pub fn login(&mut self, username: &str, password: &str) -> ClientResult<String> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(self.login_failed(INVALID_CREDENTIALS.to_string()));
        }

        self.session_state = SessionState::LoggingIn;
        let candidates = login_candidates(username, self.strategy);
        let mut last_detail = None;

        for candidate in &candidates {
            let credential = BasicCredential::new(candidate, password);
            match self.client.probe_credential(&credential) {
                Ok(ProbeOutcome::Accepted) => {
                    let session = Session::new(credential);
                    let name = session.display_name().to_string();
                    tracing::info!(user = %name, "logged in");
                    self.session = Some(session);
                    self.session_state = SessionState::LoggedIn;
                    self.close_login();
                    return Ok(name);
                }
                Ok(ProbeOutcome::Rejected { status, detail }) => {
                    tracing::debug!(%status, candidate = %candidate, "login candidate rejected");
                    last_detail = detail;
                }
                Err(err) => {
                    tracing::error!(error = ?err, "login probe failed");
                    let reason = match self.strategy {
                        LoginStrategy::Literal => err.to_string(),
                        LoginStrategy::HonorificVariants => INVALID_CREDENTIALS.to_string(),
                    };
                    return Err(self.login_failed(reason));
                }
            }
        }

        // Variant guessing hides which spelling failed and why.
        let reason = match self.strategy {
            LoginStrategy::Literal => {
                last_detail.unwrap_or_else(|| INVALID_CREDENTIALS.to_string())
            }
            LoginStrategy::HonorificVariants => INVALID_CREDENTIALS.to_string(),
        };
        Err(self.login_failed(reason))
    }

    fn login_failed(&mut self, reason: String) -> ClientError {
        self.session = None;
        self.session_state = SessionState::LoggedOut;
        self.login_error = Some(reason.clone());
        ClientError::Auth { reason }
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("logged out");
        }
        self.session_state = SessionState::LoggedOut;
    }
}
