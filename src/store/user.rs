//! User slice: users seen so far, keyed by id

use serde_json::Value;
use std::collections::BTreeMap;

use super::authentication::{user_id, CHANGE_AUTH, GET_AUTHENTICATED_USER};
use super::{Action, GenericState, RequestStatus};
use crate::api::UserDetails;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub users: BTreeMap<u64, UserDetails>,
    pub requests: GenericState,
}

impl UserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, action: &Action) {
        if action.kind != CHANGE_AUTH && action.kind != GET_AUTHENTICATED_USER {
            return;
        }

        self.requests.update(action);
        if action.status != Some(RequestStatus::Success) {
            return;
        }

        let user = action
            .payload
            .get("user")
            .cloned()
            .map(serde_json::from_value::<UserDetails>);
        match (user_id(&action.payload), user) {
            (Some(id), Some(Ok(details))) => {
                self.users.insert(id, details);
            }
            (Some(id), Some(Err(e))) => {
                tracing::warn!(id, error = %e, "ignoring malformed user payload");
            }
            _ => {}
        }
    }

    /// The authenticated user's details, if loaded
    pub fn authenticated(&self, auth_user: Option<u64>) -> Option<&UserDetails> {
        auth_user.and_then(|id| self.users.get(&id))
    }
}

/// Payload for a loaded user, in the shape the reducers read
pub fn user_payload(user: &UserDetails) -> Value {
    serde_json::json!({ "user": user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    fn jane() -> UserDetails {
        UserDetails {
            id: 7,
            username: "jane".into(),
            email: "jane@example.com".into(),
        }
    }

    #[test]
    fn test_authenticated_user_is_selected() {
        let mut store = Store::new(Some("abc".into()));
        store.dispatch(&Action::success(GET_AUTHENTICATED_USER, user_payload(&jane())));

        assert_eq!(store.authentication.user, Some(7));
        assert_eq!(
            store.user.authenticated(store.authentication.user),
            Some(&jane())
        );
    }

    #[test]
    fn test_pending_does_not_touch_users() {
        let mut state = UserState::new();
        state.reduce(&Action::pending(GET_AUTHENTICATED_USER));
        assert!(state.users.is_empty());
        assert!(state.requests.is_loading(GET_AUTHENTICATED_USER));
    }
}
