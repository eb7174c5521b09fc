//! API Error Types
//!
//! Failures of calls into the planner REST API, and the normalisation of the
//! backend's error bodies into one consistent list of messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used when the backend body carries nothing recognisable
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Shown when no better message exists and the support URL is unknown
pub const GENERIC_ERROR_MESSAGE: &str =
    "Oops, an unknown error has occurred. Please refresh the page and try again.";

/// A single normalised error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub error: String,
}

impl ErrorEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Errors returned by planner API calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,

    /// The backend answered with a non-success status
    #[error("API error {status}: {}", summary(.errors))]
    Api { status: u16, errors: Vec<ErrorEntry> },

    /// The response body did not have the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

fn summary(errors: &[ErrorEntry]) -> &str {
    errors
        .first()
        .map(|e| e.error.as_str())
        .unwrap_or(UNKNOWN_ERROR)
}

impl ApiError {
    /// Build an error from a failed response's status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let value = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
        ApiError::Api {
            status,
            errors: normalize_errors(status, &value),
        }
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Normalised error entries (empty for transport-level failures)
    pub fn errors(&self) -> &[ErrorEntry] {
        match self {
            ApiError::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// The message a page shows for this error.
    ///
    /// Uses the first backend message; falls back to `generic` when the
    /// backend said nothing useful or the request never got an answer.
    pub fn user_message(&self, generic: &str) -> String {
        self.errors()
            .iter()
            .map(|e| e.error.as_str())
            .find(|msg| !msg.is_empty() && *msg != UNKNOWN_ERROR)
            .unwrap_or(generic)
            .to_string()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Transpose a backend error body into a list of entries.
///
/// - `{"detail": "..."}` becomes one entry
/// - `{"non_field_errors": [..]}` becomes one entry per message
/// - any other 400 body becomes one entry per field (its first message)
/// - everything else becomes [`UNKNOWN_ERROR`]
pub fn normalize_errors(status: u16, body: &Value) -> Vec<ErrorEntry> {
    if let Some(detail) = body.get("detail").and_then(message_of) {
        return vec![ErrorEntry::new(detail)];
    }

    if let Some(items) = body.get("non_field_errors").and_then(Value::as_array) {
        return items
            .iter()
            .filter_map(message_of)
            .map(ErrorEntry::new)
            .collect();
    }

    if status == 400 {
        if let Some(fields) = body.as_object() {
            let errors: Vec<ErrorEntry> = fields
                .values()
                .filter_map(message_of)
                .map(ErrorEntry::new)
                .collect();
            if !errors.is_empty() {
                return errors;
            }
        }
    }

    vec![ErrorEntry::new(UNKNOWN_ERROR)]
}

/// First human-readable message in a field value (string or list of strings)
fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(message_of),
        _ => None,
    }
}

/// Generic error text, linking to support when its URL is known
pub fn generic_error_message(support_url: Option<&str>) -> String {
    match support_url {
        Some(url) if !url.is_empty() => format!(
            "Oops, an unknown error has occurred. If the issue persists, <a href=\"{}\">open a ticket</a>.",
            url
        ),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_body() {
        let errors = normalize_errors(401, &json!({"detail": "Invalid token."}));
        assert_eq!(errors, vec![ErrorEntry::new("Invalid token.")]);
    }

    #[test]
    fn test_non_field_errors_body() {
        let errors = normalize_errors(
            400,
            &json!({"non_field_errors": ["Bad credentials.", "Account locked."]}),
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].error, "Account locked.");
    }

    #[test]
    fn test_field_errors_on_400() {
        let errors = normalize_errors(400, &json!({"email": ["Enter a valid email address."]}));
        assert_eq!(errors, vec![ErrorEntry::new("Enter a valid email address.")]);
    }

    #[test]
    fn test_unknown_body() {
        assert_eq!(
            normalize_errors(500, &Value::Null),
            vec![ErrorEntry::new(UNKNOWN_ERROR)]
        );
        // Field-shaped bodies only count on a 400
        assert_eq!(
            normalize_errors(503, &json!({"email": ["nope"]})),
            vec![ErrorEntry::new(UNKNOWN_ERROR)]
        );
    }

    #[test]
    fn test_from_response_with_non_json_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.user_message("generic"), "generic");
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::from_response(404, r#"{"detail": "Not found."}"#);
        assert!(err.is_not_found());
        assert_eq!(err.user_message(GENERIC_ERROR_MESSAGE), "Not found.");

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message(GENERIC_ERROR_MESSAGE), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::from_response(400, r#"{"email": "Required."}"#);
        assert_eq!(err.to_string(), "API error 400: Required.");
        assert_eq!(ApiError::Timeout.to_string(), "Request timeout");
    }

    #[test]
    fn test_generic_message_with_support_link() {
        let msg = generic_error_message(Some("https://support.heliumedu.com"));
        assert!(msg.contains("<a href=\"https://support.heliumedu.com\">open a ticket</a>"));
        assert_eq!(generic_error_message(None), GENERIC_ERROR_MESSAGE);
        assert_eq!(generic_error_message(Some("")), GENERIC_ERROR_MESSAGE);
    }
}
