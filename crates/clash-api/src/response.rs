//! Response classification and typed decoding
//!
//! Classification turns a raw response into either the body text or the
//! `ApiError` variant for its status. Decoding the body into a typed value is
//! a separate step with its own failure kind.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::http::HttpResponse;

/// Maps a completed response to its body or a status-based error
///
/// A non-2xx body that does not parse as `ClientError` never hides the status:
/// the status variant is still returned, just without a structured body.
pub fn classify(response: HttpResponse) -> Result<String, ApiError> {
    if response.is_success() {
        return Ok(response.body);
    }

    let body = serde_json::from_str::<ClientError>(&response.body).ok();
    let message = body
        .as_ref()
        .and_then(|b| b.message.clone().or_else(|| b.reason.clone()))
        .unwrap_or_else(|| fallback_message(&response));

    tracing::warn!("API error {}: {}", response.status, message);

    Err(ApiError::from_status(response.status, message, body))
}

/// Deserializes a success body into `T`
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn fallback_message(response: &HttpResponse) -> String {
    let trimmed = response.body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        trimmed.to_string()
    }
}
