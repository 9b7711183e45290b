use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    fn action(self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }

    fn login_required(self) -> &'static str {
        match self {
            Mutation::Signup => "Please login as a teacher to register students",
            Mutation::Unregister => "Please login as a teacher to unregister students",
        }
    }

    fn transport_failure(self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

const GENERIC_REJECTION: &str = "An error occurred";

impl ActivityController {
    pub fn signup(&mut self, activity: &str, email: &str) -> ClientResult<String> {
        self.mutate(Mutation::Signup, activity, email)
    }

    pub fn unregister(&mut self, activity: &str, email: &str) -> ClientResult<String> {
        self.mutate(Mutation::Unregister, activity, email)
    }

    fn mutate(&mut self, kind: Mutation, activity: &str, email: &str) -> ClientResult<String> {
        let Some(session) = self.session.as_ref() else {
            self.show(kind.login_required(), MessageKind::Error);
            return Err(ClientError::NotAuthenticated {
                action: kind.action(),
            });
        };
        let credential = session.credential().clone();

        let activity = activity.trim();
        let email = email.trim();
        if activity.is_empty() || email.is_empty() {
            let msg = "Choose an activity and enter an email";
            self.show(msg, MessageKind::Error);
            return Err(ClientError::InvalidInput(msg.to_string()));
        }

        let result = match kind {
            Mutation::Signup => self.client.signup(&credential, activity, email),
            Mutation::Unregister => self.client.unregister(&credential, activity, email),
        };

        match result {
            Ok(message) => {
                tracing::info!(action = kind.action(), activity, email, "mutation applied");
                self.show(message.clone(), MessageKind::Success);
                // The failure notice already covers a refresh error.
                self.load_and_render().ok();
                Ok(message)
            }
            Err(ClientError::ServerRejected { status, detail }) => {
                let text = detail.clone().unwrap_or_else(|| GENERIC_REJECTION.to_string());
                self.show(text, MessageKind::Error);
                Err(ClientError::ServerRejected { status, detail })
            }
            Err(err) => {
                tracing::error!(action = kind.action(), error = ?err, "mutation failed");
                self.show(kind.transport_failure(), MessageKind::Error);
                Err(err)
            }
        }
    }
}
