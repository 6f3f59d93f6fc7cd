//! API error bodies
//!
//! Successful responses are bare JSON entities. Rejections carry a short
//! body the views show to the operator as an alert.

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on a rejected request
///
/// ```json
/// { "message": "Stock insuficiente" }
/// ```
///
/// Some endpoints answer with `error` instead of `message`; both are read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract the alert text from a raw response body
    ///
    /// Falls back to the raw text when the body is not a known JSON shape,
    /// and to `fallback` when the body is empty.
    pub fn alert_text(raw: &str, fallback: &str) -> String {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(raw)
            && let Some(text) = body.message.or(body.error)
        {
            return text;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
