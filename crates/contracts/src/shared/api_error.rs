//! Error taxonomy for calls to the records service.
//!
//! A failed call is reported as one human-readable line. The line prefers a
//! structured `message`/`error` from a JSON body, then the raw body text, then
//! a generic status string.

use serde_json::Value;
use thiserror::Error;

/// Shown for a 409 whose body carries no text
pub const DUPLICATE_MESSAGE: &str = "Username or Email already exists.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (network failure, CORS, aborted fetch)
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 409: the username or email is already taken
    #[error("{0}")]
    Conflict(String),
    /// 2xx response whose body could not be understood
    #[error("Received an invalid format from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 409 {
            let message = structured_message(body)
                .or_else(|| non_empty(body))
                .unwrap_or_else(|| DUPLICATE_MESSAGE.to_string());
            return ApiError::Conflict(message);
        }
        ApiError::Status {
            status,
            message: error_message_from_body(status, body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Conflict(_) => Some(409),
            _ => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

/// Best message for a failed response body
pub fn error_message_from_body(status: u16, body: &str) -> String {
    structured_message(body)
        .or_else(|| non_empty(body))
        .unwrap_or_else(|| format!("HTTP error! Status: {}", status))
}

/// `message` from a successful JSON body such as `{"message": "Saved"}`
pub fn success_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    string_field(&value, "message")
}

fn structured_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    string_field(&value, "message").or_else(|| string_field(&value, "error"))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(non_empty)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
