//! Application Store
//!
//! Reducers for the single state container shared across scenes. Every
//! action type gets the same bookkeeping (`messages`, `errors`, `loading`);
//! slices layer their own fields on top.

pub mod authentication;
pub mod user;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::api::{ApiError, ErrorEntry};

pub use authentication::AuthState;
pub use user::UserState;

/// Namespace prefixed to every action type
pub const APP_NAMESPACE: &str = "helium";

/// Lifecycle of the request behind an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Pending,
    Success,
    Error,
}

/// A dispatched action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
    pub status: Option<RequestStatus>,
}

impl Action {
    pub fn new(kind: impl Into<String>, status: RequestStatus, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
            status: Some(status),
        }
    }

    pub fn pending(kind: impl Into<String>) -> Self {
        Self::new(kind, RequestStatus::Pending, Value::Null)
    }

    pub fn success(kind: impl Into<String>, payload: Value) -> Self {
        Self::new(kind, RequestStatus::Success, payload)
    }

    /// A plain state change with no request behind it
    pub fn plain(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
            status: None,
        }
    }

    /// Success carrying only a user-facing message
    pub fn message(kind: impl Into<String>, message: &str) -> Self {
        Self::success(kind, serde_json::json!({ "message": message }))
    }
}

/// Build the error action for a failed request.
///
/// Backend errors carry their normalised entries; anything else becomes a
/// single entry with the error's text.
pub fn handle_error(kind: impl Into<String>, error: &ApiError) -> Action {
    let entries = match error.errors() {
        [] => vec![ErrorEntry::new(error.to_string())],
        errors => errors.to_vec(),
    };
    error_action(kind, entries)
}

/// Build the error action for a client-side failure message
pub fn error_message(kind: impl Into<String>, message: &str) -> Action {
    error_action(kind, vec![ErrorEntry::new(message)])
}

fn error_action(kind: impl Into<String>, entries: Vec<ErrorEntry>) -> Action {
    let payload = serde_json::to_value(entries).unwrap_or(Value::Null);
    Action::new(kind, RequestStatus::Error, payload)
}

/// Per-action-type request bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericState {
    pub messages: BTreeMap<String, String>,
    pub errors: BTreeMap<String, Vec<ErrorEntry>>,
    pub loading: BTreeMap<String, bool>,
}

impl GenericState {
    /// Empty bookkeeping for each of `kinds`
    pub fn new(kinds: &[&str]) -> Self {
        let mut state = Self::default();
        for kind in kinds {
            state.messages.insert(kind.to_string(), String::new());
            state.errors.insert(kind.to_string(), Vec::new());
            state.loading.insert(kind.to_string(), false);
        }
        state
    }

    /// Record the request status carried by `action`.
    ///
    /// An action without a status is treated as pending.
    pub fn update(&mut self, action: &Action) {
        let kind = action.kind.clone();
        match action.status {
            Some(RequestStatus::Success) => {
                let message = action
                    .payload
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                self.messages.insert(kind.clone(), message.to_string());
                self.loading.insert(kind.clone(), false);
                self.errors.insert(kind, Vec::new());
            }
            Some(RequestStatus::Error) => {
                self.messages.insert(kind.clone(), String::new());
                self.loading.insert(kind.clone(), false);
                self.errors.insert(kind, errors_of(&action.payload));
            }
            Some(RequestStatus::Pending) | None => {
                self.messages.insert(kind.clone(), String::new());
                self.loading.insert(kind.clone(), true);
                self.errors.insert(kind, Vec::new());
            }
        }
    }

    pub fn message(&self, kind: &str) -> Option<&str> {
        self.messages
            .get(kind)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn errors(&self, kind: &str) -> &[ErrorEntry] {
        self.errors.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self, kind: &str) -> bool {
        self.loading.get(kind).copied().unwrap_or(false)
    }
}

/// Errors in an error payload: `data.errors`, then `errors`, then the payload
/// itself
fn errors_of(payload: &Value) -> Vec<ErrorEntry> {
    let list = payload
        .pointer("/data/errors")
        .or_else(|| payload.get("errors"))
        .unwrap_or(payload);

    match list {
        Value::Array(items) => items.iter().filter_map(entry_of).collect(),
        Value::Null => Vec::new(),
        other => entry_of(other).into_iter().collect(),
    }
}

fn entry_of(value: &Value) -> Option<ErrorEntry> {
    match value {
        Value::String(s) => Some(ErrorEntry::new(s.as_str())),
        Value::Object(map) => map
            .get("error")
            .and_then(Value::as_str)
            .map(ErrorEntry::new),
        Value::Null => None,
        other => Some(ErrorEntry::new(other.to_string())),
    }
}

/// The whole application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub authentication: AuthState,
    pub user: UserState,
}

impl Store {
    /// Initial state; `token` is the session token found at startup
    pub fn new(token: Option<String>) -> Self {
        Self {
            authentication: AuthState::new(token),
            user: UserState::new(),
        }
    }

    /// Run `action` through every slice
    pub fn dispatch(&mut self, action: &Action) {
        tracing::debug!(kind = %action.kind, status = ?action.status, "dispatch");
        self.authentication.reduce(action);
        self.user.reduce(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KIND: &str = "helium/test/THING";

    #[test]
    fn test_new_state_is_empty() {
        let state = GenericState::new(&[KIND]);
        assert_eq!(state.messages[KIND], "");
        assert!(state.errors[KIND].is_empty());
        assert!(!state.is_loading(KIND));
    }

    #[test]
    fn test_request_lifecycle() {
        let mut state = GenericState::new(&[KIND]);

        state.update(&Action::pending(KIND));
        assert!(state.is_loading(KIND));

        state.update(&Action::message(KIND, "Done"));
        assert!(!state.is_loading(KIND));
        assert_eq!(state.message(KIND), Some("Done"));

        state.update(&error_message(KIND, "Broken"));
        assert_eq!(state.message(KIND), None);
        assert_eq!(state.errors(KIND), &[ErrorEntry::new("Broken")]);
    }

    #[test]
    fn test_error_payload_shapes() {
        let mut state = GenericState::default();

        state.update(&Action::new(
            KIND,
            RequestStatus::Error,
            json!({"data": {"errors": [{"error": "nested"}]}}),
        ));
        assert_eq!(state.errors(KIND)[0].error, "nested");

        state.update(&Action::new(
            KIND,
            RequestStatus::Error,
            json!({"errors": ["flat"]}),
        ));
        assert_eq!(state.errors(KIND)[0].error, "flat");

        state.update(&Action::new(KIND, RequestStatus::Error, json!("bare")));
        assert_eq!(state.errors(KIND)[0].error, "bare");
    }

    #[test]
    fn test_handle_error_keeps_backend_entries() {
        let err = ApiError::from_response(400, r#"{"email": ["Bad email."]}"#);
        let action = handle_error(KIND, &err);
        let mut state = GenericState::default();
        state.update(&action);
        assert_eq!(state.errors(KIND), &[ErrorEntry::new("Bad email.")]);

        let action = handle_error(KIND, &ApiError::Timeout);
        state.update(&action);
        assert_eq!(state.errors(KIND)[0].error, "Request timeout");
    }

    #[test]
    fn test_action_type_serialises_as_type() {
        let value = serde_json::to_value(Action::pending(KIND)).unwrap();
        assert_eq!(value["type"], KIND);
        assert_eq!(value["status"], "PENDING");
    }
}
