//! Authentication slice

use serde_json::Value;

use super::{Action, GenericState, RequestStatus};

pub const REGISTER_USER: &str = "helium/auth/REGISTER_USER";
pub const CHANGE_AUTH: &str = "helium/auth/CHANGE_AUTH";
pub const GET_AUTHENTICATED_USER: &str = "helium/auth/GET_AUTHENTICATED_USER";
pub const FORGOT_PASSWORD: &str = "helium/auth/FORGOT_PASSWORD";

pub const ACTION_TYPES: [&str; 4] = [
    REGISTER_USER,
    CHANGE_AUTH,
    FORGOT_PASSWORD,
    GET_AUTHENTICATED_USER,
];

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<u64>,
    pub requests: GenericState,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AuthState {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            user: None,
            requests: GenericState::new(&ACTION_TYPES),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn reduce(&mut self, action: &Action) {
        match action.kind.as_str() {
            CHANGE_AUTH => {
                self.requests.update(action);
                if is_settled(action) {
                    self.token = action
                        .payload
                        .get("token")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    self.user = user_id(&action.payload);
                }
            }
            GET_AUTHENTICATED_USER => {
                self.requests.update(action);
                if is_settled(action) {
                    self.user = user_id(&action.payload);
                }
            }
            REGISTER_USER | FORGOT_PASSWORD => self.requests.update(action),
            _ => {}
        }
    }
}

/// Success, or a plain state change (logout)
fn is_settled(action: &Action) -> bool {
    matches!(action.status, Some(RequestStatus::Success) | None)
}

pub(super) fn user_id(payload: &Value) -> Option<u64> {
    payload.pointer("/user/id").and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_types_are_namespaced() {
        for kind in ACTION_TYPES {
            assert!(kind.starts_with(&format!("{}/auth/", crate::store::APP_NAMESPACE)));
        }
    }

    #[test]
    fn test_change_auth_stores_token_and_user() {
        let mut state = AuthState::new(None);
        state.reduce(&Action::pending(CHANGE_AUTH));
        assert!(state.requests.is_loading(CHANGE_AUTH));
        assert!(!state.is_authenticated());

        state.reduce(&Action::success(
            CHANGE_AUTH,
            json!({"token": "abc", "user": {"id": 3}}),
        ));
        assert_eq!(state.token.as_deref(), Some("abc"));
        assert_eq!(state.user, Some(3));
        assert!(!state.requests.is_loading(CHANGE_AUTH));
    }

    #[test]
    fn test_logout_clears_token() {
        let mut state = AuthState::new(Some("abc".into()));
        assert!(state.is_authenticated());
        state.reduce(&Action::plain(CHANGE_AUTH, json!({})));
        assert!(!state.is_authenticated());
        assert_eq!(state.user, None);
    }

    #[test]
    fn test_failed_login_keeps_token() {
        let mut state = AuthState::new(Some("abc".into()));
        state.reduce(&super::super::error_message(CHANGE_AUTH, "Nope"));
        assert_eq!(state.token.as_deref(), Some("abc"));
        assert_eq!(state.requests.errors(CHANGE_AUTH)[0].error, "Nope");
    }

    #[test]
    fn test_unrelated_action_is_ignored() {
        let mut state = AuthState::new(None);
        let before = state.clone();
        state.reduce(&Action::pending("helium/other/THING"));
        assert_eq!(state, before);
    }
}
