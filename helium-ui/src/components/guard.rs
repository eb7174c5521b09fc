//! Auth Guard
//!
//! Wraps the planner and settings scenes. Visitors without a session are sent
//! to the login page, remembering where they were headed.

use helium::routes::login_redirect;
use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let location = use_location();

    move || {
        if state.is_authenticated() {
            children().into_view()
        } else {
            let path = location.pathname.get_untracked();
            view! { <Redirect path=login_redirect(&path) /> }.into_view()
        }
    }
}
