//! Login Page

use helium::api::TokenPair;
use helium::flows::login::{self, LoginOutcome, LoginPage};
use helium::flows::PageLoad;
use helium::routes::Scene;
use helium::session::parse_jwt_claims;
use helium::store::authentication::CHANGE_AUTH;
use helium::store::{handle_error, Action};
use leptos::*;
use leptos_router::*;
use serde_json::{json, Value};

use super::{navigate_to, set_title};
use crate::api;
use crate::components::StatusAlert;
use crate::state::global::GlobalState;
use crate::state::session;

/// `CHANGE_AUTH` payload for a fresh token pair
fn auth_payload(tokens: &TokenPair) -> Value {
    let user = parse_jwt_claims(&tokens.access)
        .ok()
        .and_then(|claims| claims.user_id)
        .map(|id| json!({ "id": id }));

    json!({ "token": tokens.access, "user": user })
}

#[component]
pub fn Login() -> impl IntoView {
    set_title(Scene::Login);

    if let PageLoad::Redirect(path) = login::on_load(session::access_token().as_deref()) {
        return view! { <Redirect path=path /> }.into_view();
    }

    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();
    let query = use_location().search.get_untracked();
    let page = create_rw_signal(LoginPage::new(&query, session::take_flash()));
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = page.with_untracked(|p| {
            p.submit(&username.get_untracked(), &password.get_untracked())
        });
        state.dispatch(Action::pending(CHANGE_AUTH));

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&request).await;
            if let Err(e) = &result {
                state.dispatch(handle_error(CHANGE_AUTH, e));
            }

            if let Some(LoginOutcome::SignedIn { tokens, navigation }) =
                page.try_update(|p| p.complete(result))
            {
                session::store_tokens(&tokens, api::endpoints().environment);
                state.dispatch(Action::success(CHANGE_AUTH, auth_payload(&tokens)));
                navigate_to(&navigate, &navigation);
            }
        });
    };

    view! {
        <div class="main-container">
            <div class="container">
                <div class="well">
                    <h4>"Enter Your Login Information"</h4>

                    <StatusAlert status=Signal::derive(move || page.with(|p| p.status().clone())) />

                    <form id="login-form" on:submit=on_submit>
                        <ul class="form-list">
                            <li>
                                <input
                                    id="id_username"
                                    type="text"
                                    class="form-control"
                                    placeholder="Username"
                                    autofocus=true
                                    prop:value=move || username.get()
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <input
                                    id="id_password"
                                    type="password"
                                    class="form-control"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            </li>
                        </ul>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || state.is_loading(CHANGE_AUTH)
                        >
                            "Login"
                        </button>
                    </form>

                    <p>
                        <A href="/forgot">"I forgot my password"</A>
                        " · "
                        <A href="/register">"I want to register"</A>
                    </p>
                </div>
            </div>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn auth_payload_without_claims_has_no_user() {
        let tokens = TokenPair {
            access: "opaque".into(),
            refresh: "r".into(),
        };
        let payload = auth_payload(&tokens);
        assert_eq!(payload["token"], "opaque");
        assert!(payload["user"].is_null());
    }
}
