//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="toast-container">
            {move || {
                state.success.get().map(|msg| view! {
                    <div class="toast toast-success">{msg}</div>
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <div class="toast toast-error">{msg}</div>
                })
            }}
        </div>
    }
}
