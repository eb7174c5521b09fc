//! Global Application State
//!
//! The shared store, wrapped in a signal, plus toast messages.

use helium::store::{Action, Store};
use leptos::*;

use super::session;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Reduced application state
    pub store: RwSignal<Store>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    /// Fresh state, seeded from the stored access token
    pub fn new() -> Self {
        Self {
            store: create_rw_signal(Store::new(session::access_token())),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Run an action through the store's reducers
    pub fn dispatch(&self, action: Action) {
        self.store.update(|store| store.dispatch(&action));
    }

    pub fn is_authenticated(&self) -> bool {
        self.store
            .with(|store| store.authentication.is_authenticated())
    }

    /// Whether a request of `kind` is in flight
    pub fn is_loading(&self, kind: &str) -> bool {
        self.store
            .with(|store| store.authentication.requests.is_loading(kind))
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helium::store::authentication::{CHANGE_AUTH, FORGOT_PASSWORD};
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn dispatch_updates_the_store() {
        let runtime = create_runtime();
        session::clear_tokens();
        let state = GlobalState::new();

        assert!(!state.is_authenticated());
        state.dispatch(Action::pending(FORGOT_PASSWORD));
        assert!(state.is_loading(FORGOT_PASSWORD));

        state.dispatch(Action::success(CHANGE_AUTH, json!({ "token": "abc" })));
        assert!(state.is_authenticated());

        runtime.dispose();
    }
}
