//! Footer Component

use leptos::*;
use leptos_router::*;

use crate::components::Loading;
use crate::state::global::GlobalState;
use helium::store::authentication::ACTION_TYPES;

/// Page footer with legal links and a request indicator
#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let year = chrono::Utc::now().format("%Y").to_string();
    let busy = move || ACTION_TYPES.iter().any(|kind| state.is_loading(kind));

    view! {
        <footer class="footer">
            <div class="container">
                <A href="/terms">"Terms of Service"</A>
                <A href="/privacy">"Privacy Policy"</A>
                <A href="/support">"Support"</A>
                <span>{format!("© {} Helium Edu", year)}</span>
                <Show when=busy>
                    <Loading />
                </Show>
            </div>
        </footer>
    }
}
