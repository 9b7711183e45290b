//! Response bodies of the sign-up API.

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body; `detail` is a string for handled errors but may be a list for
/// request validation failures, so it is kept loosely typed.
#[derive(Debug, serde::Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub(super) detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub(super) fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
