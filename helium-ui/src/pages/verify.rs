//! Verify Page
//!
//! Confirms an email address from the link in the welcome email, then
//! replaces itself with the login or register page.

use helium::flows::verify::{self, VerifyParams};
use helium::routes::Scene;
use leptos::*;
use leptos_router::*;

use super::{navigate_to, set_title, Mounted};
use crate::api;
use crate::components::loading::PageLoading;
use crate::state::session;

#[component]
pub fn Verify() -> impl IntoView {
    set_title(Scene::Verify);

    let navigate = use_navigate();
    let params = VerifyParams::from_query(&use_location().search.get_untracked());

    let mounted = Mounted::new();

    spawn_local(async move {
        if !mounted.get() {
            return;
        }
        let outcome = verify::outcome(api::verify(&params).await);
        if !mounted.get() {
            return;
        }
        if let Some(flash) = &outcome.flash {
            session::store_flash(flash);
        }
        navigate_to(&navigate, &outcome.navigation);
    });

    view! { <PageLoading caption="Verifying your email address..." /> }
}
