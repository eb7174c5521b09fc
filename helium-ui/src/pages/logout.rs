//! Logout Page
//!
//! Revokes the refresh token, forgets the session and returns to login.

use helium::flows::login;
use helium::routes::Scene;
use helium::store::authentication::CHANGE_AUTH;
use helium::store::Action;
use leptos::*;
use leptos_router::*;
use serde_json::Value;

use super::{navigate_to, set_title, Mounted};
use crate::api;
use crate::components::loading::PageLoading;
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Logout() -> impl IntoView {
    set_title(Scene::Logout);

    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();
    let mounted = Mounted::new();

    spawn_local(async move {
        if !mounted.get() {
            return;
        }
        let plan = login::logout(session::refresh_token().as_deref());
        let access = session::access_token();
        session::clear_tokens();
        state.dispatch(Action::plain(CHANGE_AUTH, Value::Null));

        if let Some(refresh) = plan.blacklist {
            if let Err(e) = api::blacklist(&refresh, access.as_deref()).await {
                web_sys::console::warn_1(&format!("Token blacklist failed: {}", e).into());
            }
        }

        if mounted.get() {
            navigate_to(&navigate, &plan.navigation);
        }
    });

    view! { <PageLoading caption="Logging out..." /> }
}
