use super::*;

use super::http_client;

use crate::model::ActivityList;

impl ActivityClient {
    pub fn list_activities(&self) -> ClientResult<ActivityList> {
        let url = self.endpoint(&["activities"], None)?;
        let resp = self.send(self.client.get(url), "list activities")?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "list activities failed");
            return Err(ClientError::ServerRejected {
                status,
                detail: http_client::rejection_detail(resp),
            });
        }
        resp.json().map_err(|source| ClientError::Decode {
            action: "list activities",
            source,
        })
    }

    /// Returns the server's confirmation message.
    pub fn signup(
        &self,
        credential: &BasicCredential,
        activity: &str,
        email: &str,
    ) -> ClientResult<String> {
        let url = self.endpoint(&["activities", activity, "signup"], Some(email))?;
        let req = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, credential.header_value());
        let resp = self.send(req, "signup")?;
        self.read_message(resp, "signup")
    }

    pub fn unregister(
        &self,
        credential: &BasicCredential,
        activity: &str,
        email: &str,
    ) -> ClientResult<String> {
        let url = self.endpoint(&["activities", activity, "unregister"], Some(email))?;
        let req = self
            .client
            .delete(url)
            .header(reqwest::header::AUTHORIZATION, credential.header_value());
        let resp = self.send(req, "unregister")?;
        self.read_message(resp, "unregister")
    }
}
