//! In-memory teacher session and login candidate generation.

use crate::model::LoginStrategy;
use crate::remote::BasicCredential;

const HONORIFICS: [&str; 2] = ["mr.", "mrs."];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggingIn,
    LoggedIn,
}

#[derive(Clone, Debug)]
pub struct Session {
    credential: BasicCredential,
    display_name: String,
}

impl Session {
    pub fn new(credential: BasicCredential) -> Self {
        let display_name = credential.username().to_string();
        Self {
            credential,
            display_name,
        }
    }

    pub fn credential(&self) -> &BasicCredential {
        &self.credential
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Lowercases and drops a leading honorific, e.g. "Mr. Smith" -> "smith".
pub fn normalize_username(username: &str) -> String {
    let lower = username.to_lowercase();
    let stripped = HONORIFICS
        .iter()
        .find_map(|h| lower.strip_prefix(h))
        .unwrap_or(&lower);
    stripped.trim_start().to_string()
}

/// Usernames to probe, in order, without duplicates.
pub fn login_candidates(username: &str, strategy: LoginStrategy) -> Vec<String> {
    let mut out = vec![username.to_string()];
    if strategy == LoginStrategy::Literal {
        return out;
    }

    let normalized = normalize_username(username);
    for h in HONORIFICS {
        let candidate = format!("{}{}", h, normalized);
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
