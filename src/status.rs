use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub shown_at: Instant,
}

/// Holds the one visible status message. Showing a new message replaces the
/// old one and restarts the deadline, so an earlier deadline can never clear
/// a later message.
#[derive(Debug)]
pub struct StatusBoard {
    ttl: Duration,
    current: Option<StatusMessage>,
}

impl StatusBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind, now: Instant) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }

    pub fn visible(&self, now: Instant) -> Option<&StatusMessage> {
        self.current
            .as_ref()
            .filter(|m| now.saturating_duration_since(m.shown_at) < self.ttl)
    }

    /// Drops the message once its deadline has passed. Returns true if cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
