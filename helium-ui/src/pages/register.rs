//! Register Page

use helium::flows::register::{RegisterForm, RegisterPage, REGISTERED_MESSAGE};
use helium::routes::Scene;
use helium::store::authentication::REGISTER_USER;
use helium::store::{handle_error, Action};
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsValue;

use super::{navigate_to, set_title};
use crate::api;
use crate::components::StatusAlert;
use crate::state::global::GlobalState;
use crate::state::session;

const DEFAULT_TIME_ZONE: &str = "America/Chicago";

const TIME_ZONES: [&str; 12] = [
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Phoenix",
    "America/Los_Angeles",
    "America/Anchorage",
    "Pacific/Honolulu",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Kolkata",
    "Asia/Tokyo",
    "Australia/Sydney",
];

/// The browser's IANA time zone, if it reports one
fn browser_time_zone() -> Option<String> {
    let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
        .resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()?
        .as_string()
        .filter(|zone| !zone.is_empty())
}

#[component]
pub fn Register() -> impl IntoView {
    set_title(Scene::Register);

    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();
    let page = create_rw_signal(RegisterPage::new());
    let form = create_rw_signal(RegisterForm {
        time_zone: browser_time_zone().unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string()),
        ..Default::default()
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let values = form.get_untracked();
        let Some(Some(request)) = page.try_update(|p| p.submit(&values)) else {
            return;
        };
        state.dispatch(Action::pending(REGISTER_USER));

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&request).await;
            match &result {
                Ok(()) => state.dispatch(Action::message(REGISTER_USER, REGISTERED_MESSAGE)),
                Err(e) => state.dispatch(handle_error(REGISTER_USER, e)),
            }

            if let Some(Some((flash, navigation))) = page.try_update(|p| p.complete(result)) {
                session::store_flash(&flash);
                navigate_to(&navigate, &navigation);
            }
        });
    };

    let time_zones = move || {
        let current = form.with(|f| f.time_zone.clone());
        let mut zones: Vec<String> = TIME_ZONES.iter().map(|z| z.to_string()).collect();
        if !zones.contains(&current) {
            zones.insert(0, current.clone());
        }
        zones
            .into_iter()
            .map(|zone| {
                let selected = zone == current;
                view! { <option value=zone.clone() selected=selected>{zone}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="main-container">
            <div class="container">
                <div class="well">
                    <h4>"New User Registration"</h4>

                    <StatusAlert status=Signal::derive(move || page.with(|p| p.status().clone())) />

                    <form id="register-form" on:submit=on_submit>
                        <ul class="form-list">
                            <li>
                                <input
                                    id="id_username"
                                    type="text"
                                    class="form-control"
                                    placeholder="Username"
                                    autofocus=true
                                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <input
                                    id="id_email"
                                    type="email"
                                    class="form-control"
                                    placeholder="Email"
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <input
                                    id="id_password1"
                                    type="password"
                                    class="form-control"
                                    placeholder="Password"
                                    on:input=move |ev| form.update(|f| f.password1 = event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <input
                                    id="id_password2"
                                    type="password"
                                    class="form-control"
                                    placeholder="Repeat password"
                                    on:input=move |ev| form.update(|f| f.password2 = event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <select
                                    id="id_time_zone"
                                    class="form-control"
                                    on:change=move |ev| form.update(|f| f.time_zone = event_target_value(&ev))
                                >
                                    {time_zones}
                                </select>
                            </li>
                        </ul>
                        <p>
                            "By registering you agree to the "
                            <A href="/terms">"Terms of Service"</A>
                            " and "
                            <A href="/privacy">"Privacy Policy"</A>
                            "."
                        </p>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || state.is_loading(REGISTER_USER)
                        >
                            "Register"
                        </button>
                    </form>

                    <p><A href="/login">"Back to login"</A></p>
                </div>
            </div>
        </div>
    }
}
