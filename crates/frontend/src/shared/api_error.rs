//! Gateway errors and the resolver that turns them into display messages.
//!
//! Views never see an `ApiError`: call sites resolve it with [`error_message`].

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

/// Error body shapes the API is known to send
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Human-readable message for an API failure
pub fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Cannot reach the server. Check your connection.".to_string(),
        ApiError::Http { status, body } => {
            if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
                if let Some(msg) = parsed.error.or(parsed.message) {
                    if !msg.trim().is_empty() {
                        return msg;
                    }
                }
            }
            status_message(*status)
        }
        ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
        ApiError::Serialize(_) => "The form data could not be sent.".to_string(),
    }
}

fn status_message(status: u16) -> String {
    match status {
        400 => "The request was rejected as invalid.".to_string(),
        401 => "Your session has expired. Please sign in again.".to_string(),
        403 => "You do not have permission for this action.".to_string(),
        404 => "The record was not found.".to_string(),
        409 => "The record was changed by someone else.".to_string(),
        500..=599 => "Server error. Please try again later.".to_string(),
        other => format!("Request failed (HTTP {})", other),
    }
}
