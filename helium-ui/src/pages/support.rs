//! Support Page
//!
//! Looks up the support URL and replaces itself with it.

use helium::flows::support::{self, SupportOutcome};
use helium::flows::StatusElement;
use helium::routes::Scene;
use leptos::*;

use super::{set_title, Mounted};
use crate::api;
use crate::components::loading::PageLoading;
use crate::components::StatusAlert;

#[component]
pub fn Support() -> impl IntoView {
    set_title(Scene::Support);

    let status = create_rw_signal(StatusElement::new());
    let (failed, set_failed) = create_signal(false);
    let mounted = Mounted::new();

    spawn_local(async move {
        if !mounted.get() {
            return;
        }
        let outcome = support::resolve(api::info().await);
        if !mounted.get() {
            return;
        }
        match outcome {
            SupportOutcome::Redirect(url) => {
                if let Err(e) = window().location().replace(&url) {
                    web_sys::console::error_1(&format!("Redirect to support failed: {:?}", e).into());
                }
            }
            SupportOutcome::Failed(message) => {
                status.update(|s| s.show(&message));
                set_failed.set(true);
            }
        }
    });

    view! {
        <Show
            when=move || failed.get()
            fallback=|| view! { <PageLoading caption="Taking you to support..." /> }
        >
            <div class="main-container">
                <div class="container">
                    <StatusAlert status=status />
                </div>
            </div>
        </Show>
    }
}
