use super::*;

use super::types::ErrorBody;

impl ActivityClient {
    /// Joins path segments onto the base URL, percent-encoding each one.
    pub(super) fn endpoint(&self, segments: &[&str], email: Option<&str>) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ClientError::Url {
                url: self.base_url.to_string(),
                reason: "not a base URL".to_string(),
            })?;
            path.pop_if_empty().extend(segments);
        }
        if let Some(email) = email {
            url.query_pairs_mut().append_pair("email", email);
        }
        Ok(url)
    }

    pub(super) fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
        action: &'static str,
    ) -> ClientResult<reqwest::blocking::Response> {
        let resp = req
            .send()
            .map_err(|source| ClientError::Network { action, source })?;
        tracing::debug!(action, status = %resp.status(), url = %resp.url(), "response");
        Ok(resp)
    }

    /// Maps a mutation response to its confirmation text or a rejection.
    pub(super) fn read_message(
        &self,
        resp: reqwest::blocking::Response,
        action: &'static str,
    ) -> ClientResult<String> {
        let status = resp.status();
        if status.is_success() {
            let body: MessageResponse = resp
                .json()
                .map_err(|source| ClientError::Decode { action, source })?;
            return Ok(body.message);
        }

        let detail = rejection_detail(resp);
        tracing::warn!(action, %status, detail = detail.as_deref(), "request rejected");
        Err(ClientError::ServerRejected { status, detail })
    }
}

/// Best-effort read of a `{detail}` error body; anything unreadable is `None`.
pub(super) fn rejection_detail(resp: reqwest::blocking::Response) -> Option<String> {
    resp.json::<ErrorBody>().ok().and_then(|b| b.detail_text())
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
