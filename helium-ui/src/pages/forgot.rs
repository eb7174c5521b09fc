//! Forgot Password Page
//!
//! Emails a temporary password. A browser that already holds a session is
//! sent to settings instead.

use helium::flows::forgot::{self, ForgotPage};
use helium::flows::PageLoad;
use helium::routes::Scene;
use helium::store::authentication::FORGOT_PASSWORD;
use helium::store::{handle_error, Action};
use leptos::*;
use leptos_router::*;

use super::set_title;
use crate::api;
use crate::components::StatusAlert;
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Forgot() -> impl IntoView {
    set_title(Scene::Forgot);

    if let PageLoad::Redirect(path) = forgot::on_load(&session::cookies()) {
        return view! { <Redirect path=path /> }.into_view();
    }

    let state = expect_context::<GlobalState>();
    let page = create_rw_signal(ForgotPage::new());
    let (email, set_email) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = page.try_update(|p| p.submit(&email.get_untracked())) else {
            return;
        };
        state.dispatch(Action::pending(FORGOT_PASSWORD));

        spawn_local(async move {
            let result = api::forgot(&request).await;
            match &result {
                Ok(()) => state.dispatch(Action::message(
                    FORGOT_PASSWORD,
                    forgot::FORGOT_SUCCESS_MESSAGE,
                )),
                Err(e) => {
                    web_sys::console::error_1(&format!("Forgot password failed: {}", e).into());
                    state.dispatch(handle_error(FORGOT_PASSWORD, e));
                }
            }
            page.update(|p| {
                p.complete(result);
            });
        });
    };

    view! {
        <div class="main-container">
            <div class="container">
                <div class="well">
                    <h4>"Retrieve Password"</h4>
                    <p>"Enter your email address and we'll send you a temporary password."</p>

                    <StatusAlert status=Signal::derive(move || page.with(|p| p.status().clone())) />

                    <form id="forgot-form" on:submit=on_submit>
                        <ul class="form-list">
                            <li>
                                <input
                                    id="id_email"
                                    type="email"
                                    class="form-control"
                                    placeholder="Email"
                                    autofocus=true
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </li>
                        </ul>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || state.is_loading(FORGOT_PASSWORD)
                        >
                            "Send Me!"
                        </button>
                    </form>

                    <p><A href="/login">"Back to login"</A></p>
                </div>
            </div>
        </div>
    }
    .into_view()
}
