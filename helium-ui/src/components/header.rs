//! Header Component
//!
//! Navigation bar. Signed-in visitors see the planner links, everyone else
//! the public pages.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <nav class="navbar">
            <div class="container">
                <A href="/" class="brand">"Helium"</A>

                <div class="nav-links">
                    {move || {
                        if state.is_authenticated() {
                            view! {
                                <NavLink href="/planner/calendar" label="Calendar" />
                                <NavLink href="/planner/classes" label="Classes" />
                                <NavLink href="/planner/materials" label="Materials" />
                                <NavLink href="/planner/grades" label="Grades" />
                                <NavLink href="/settings" label="Settings" />
                                <NavLink href="/logout" label="Logout" />
                            }
                            .into_view()
                        } else {
                            view! {
                                <NavLink href="/about" label="About" />
                                <NavLink href="/press" label="Press" />
                                <NavLink href="/contact" label="Contact" />
                                <NavLink href="/register" label="Register" />
                                <NavLink href="/login" label="Login" />
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href active_class="active">
            {label}
        </A>
    }
}
