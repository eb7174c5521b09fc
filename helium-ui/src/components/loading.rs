//! Loading Component

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <span class="loading-spinner" />
    }
}

/// Full-page loading spinner with a caption
#[component]
pub fn PageLoading(#[prop(into)] caption: String) -> impl IntoView {
    view! {
        <div class="main-container align-center">
            <span class="loading-spinner" />
            <p>{caption}</p>
        </div>
    }
}
