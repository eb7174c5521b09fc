//! Planner Scenes
//!
//! Calendar, classes, materials and grades. Each shows the signed-in user
//! from the store; the planner data itself is served by the other apps.

use helium::api::ApiError;
use helium::routes::Scene;
use helium::store::authentication::GET_AUTHENTICATED_USER;
use helium::store::user::user_payload;
use helium::store::{handle_error, Action};
use leptos::*;

use super::set_title;
use crate::api;
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Fetch the signed-in user into the store unless it is already there
pub(crate) fn load_user(state: GlobalState) {
    let known = state.store.with_untracked(|store| {
        store
            .user
            .authenticated(store.authentication.user)
            .is_some()
    });
    if known || state.is_loading(GET_AUTHENTICATED_USER) {
        return;
    }

    state.dispatch(Action::pending(GET_AUTHENTICATED_USER));
    spawn_local(async move {
        match api::user().await {
            Ok(user) => {
                state.dispatch(Action::success(GET_AUTHENTICATED_USER, user_payload(&user)));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load user: {}", e).into());
                state.dispatch(handle_error(GET_AUTHENTICATED_USER, &e));
                if matches!(e, ApiError::Api { status: 401, .. }) {
                    state.show_error("Your session has expired. Please login again.");
                }
            }
        }
    });
}

/// Username of the signed-in user, once loaded
pub(crate) fn username(state: GlobalState) -> Signal<Option<String>> {
    Signal::derive(move || {
        state.store.with(|store| {
            store
                .user
                .authenticated(store.authentication.user)
                .map(|user| user.username.clone())
        })
    })
}

#[component]
fn PlannerScene(scene: Scene, blurb: &'static str) -> impl IntoView {
    set_title(scene);

    let state = expect_context::<GlobalState>();
    load_user(state);
    let name = username(state);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>{scene.title()}</h1>
                </div>

                {move || match name.get() {
                    Some(name) => view! { <p class="lead">{format!("Welcome back, {}!", name)}</p> }.into_view(),
                    None => view! { <Loading /> }.into_view(),
                }}

                <p>{blurb}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Calendar() -> impl IntoView {
    view! {
        <PlannerScene
            scene=Scene::Calendar
            blurb="Your classes, assignments and events, color-coordinated in one place."
        />
    }
}

#[component]
pub fn Classes() -> impl IntoView {
    view! {
        <PlannerScene
            scene=Scene::Classes
            blurb="Terms, courses, teachers, rooms and schedules at a glance."
        />
    }
}

#[component]
pub fn Materials() -> impl IntoView {
    view! {
        <PlannerScene
            scene=Scene::Materials
            blurb="The books, supplies and equipment each class needs."
        />
    }
}

#[component]
pub fn Grades() -> impl IntoView {
    view! {
        <PlannerScene
            scene=Scene::Grades
            blurb="Grades for every class and how your term is trending."
        />
    }
}
