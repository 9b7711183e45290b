//! The activity client controller: one instance owns the HTTP client, the
//! session, the status board and the rendered list.

use std::time::Instant;

use crate::error::{ClientError, ClientResult};
use crate::model::{ClientConfig, LoginStrategy};
use crate::remote::ActivityClient;
use crate::render::{self, ActivityCard, LOAD_FAILED_NOTICE};
use crate::session::{Session, SessionState};
use crate::status::{MessageKind, StatusBoard, StatusMessage};

mod login;
mod mutations;
pub use self::login::INVALID_CREDENTIALS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed(String),
}

pub struct ActivityController {
    client: ActivityClient,
    strategy: LoginStrategy,

    session: Option<Session>,
    session_state: SessionState,

    login_open: bool,
    login_error: Option<String>,

    status: StatusBoard,

    view: ListView,
    options: Vec<String>,
}

impl ActivityController {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = ActivityClient::new(config)?;
        Ok(Self::with_client(
            client,
            config.login_strategy,
            StatusBoard::new(config.message_ttl()),
        ))
    }

    pub fn with_client(
        client: ActivityClient,
        strategy: LoginStrategy,
        status: StatusBoard,
    ) -> Self {
        Self {
            client,
            strategy,
            session: None,
            session_state: SessionState::LoggedOut,
            login_open: false,
            login_error: None,
            status,
            view: ListView::Loading,
            options: Vec::new(),
        }
    }

    /// Fetches the activity list and replaces the rendered cards and options.
    /// On failure the view becomes the static failure notice.
    pub fn load_and_render(&mut self) -> ClientResult<()> {
        match self.client.list_activities() {
            Ok(list) => {
                tracing::debug!(count = list.len(), "activities loaded");
                self.view = ListView::Loaded(render::render_activities(&list));
                self.options = render::activity_options(&list);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = ?err, "error fetching activities");
                self.view = ListView::Failed(LOAD_FAILED_NOTICE.to_string());
                Err(err)
            }
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.view {
            ListView::Loaded(cards) => cards,
            ListView::Loading | ListView::Failed(_) => &[],
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    pub fn status_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.status.visible(now)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status_at(Instant::now())
    }

    /// Clears an expired status message; returns true if one was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.status.expire(now)
    }

    fn show(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.status.show(text, kind, Instant::now());
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
