//! Status Alert Component
//!
//! Renders a `StatusElement`: its classes and inner HTML, verbatim.

use helium::flows::StatusElement;
use leptos::*;

#[component]
pub fn StatusAlert(#[prop(into)] status: Signal<StatusElement>) -> impl IntoView {
    view! {
        <div
            id="status"
            role="alert"
            class=move || status.with(|s| s.class_attr())
            inner_html=move || status.with(|s| s.html().to_string())
        />
    }
}
