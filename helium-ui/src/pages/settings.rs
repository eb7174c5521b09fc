//! Settings Page
//!
//! Account details and the API connection.

use helium::routes::Scene;
use helium::store::authentication::GET_AUTHENTICATED_USER;
use leptos::*;
use leptos_router::*;

use super::planner::load_user;
use super::set_title;
use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    set_title(Scene::Settings);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>"Settings"</h1>
                </div>

                <AccountSettings />
                <ApiSettings />
            </div>
        </div>
    }
}

/// Details of the signed-in account
#[component]
fn AccountSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    load_user(state);

    let user = move || {
        state.store.with(|store| {
            store
                .user
                .authenticated(store.authentication.user)
                .cloned()
        })
    };
    let errors = move || {
        state.store.with(|store| {
            store
                .authentication
                .requests
                .errors(GET_AUTHENTICATED_USER)
                .iter()
                .map(|e| e.error.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section>
            <h2>"Account"</h2>
            {move || match user() {
                Some(user) => view! {
                    <dl>
                        <dt>"Username"</dt>
                        <dd>{user.username}</dd>
                        <dt>"Email"</dt>
                        <dd>{user.email}</dd>
                    </dl>
                }
                .into_view(),
                None => view! {
                    <ul>
                        {errors().into_iter().map(|e| view! { <li class="alert alert-warning">{e}</li> }).collect_view()}
                    </ul>
                }
                .into_view(),
            }}
            <p>
                <A href="/forgot">"Reset your password"</A>
                " · "
                <A href="/logout">"Logout"</A>
            </p>
        </section>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);
        api::set_api_base(&api_url.get());

        spawn_local(async move {
            match api::info().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    state.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        state.show_success("API URL saved");
    };

    let reset_url = move |_| {
        api::set_api_base("");
        set_api_url.set(api::get_api_base());
        set_test_result.set(None);
    };

    view! {
        <section>
            <h2>"API Connection"</h2>
            <p>{move || format!("Environment: {}", api::endpoints().environment)}</p>

            <div>
                <label for="api-url">"Helium API URL"</label>
                <input
                    id="api-url"
                    type="text"
                    class="form-control"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <button class="btn btn-default" on:click=test_connection disabled=move || testing.get()>
                    {move || if testing.get() { "Testing..." } else { "Test" }}
                </button>
                <button class="btn btn-primary" on:click=save_url>"Save"</button>
                <button class="btn btn-default" on:click=reset_url>"Reset"</button>
            </div>

            <p>
                "Status: "
                {move || match test_result.get() {
                    Some(true) => "Connected",
                    Some(false) => "Failed",
                    None => "Not tested",
                }}
            </p>
        </section>
    }
}
