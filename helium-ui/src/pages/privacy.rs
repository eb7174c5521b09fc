//! Privacy Policy Page

use helium::routes::Scene;
use leptos::*;
use leptos_router::*;

use super::set_title;

#[component]
pub fn Privacy() -> impl IntoView {
    set_title(Scene::Privacy);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>"Privacy Policy" <small>"Last updated November 26, 2017"</small></h1>
                </div>

                <h2>"Acceptance of Policy"</h2>
                <p>
                    "This policy is part of the "
                    <A href="/terms">"Terms of Service"</A>
                    ". Using Helium means you accept it."
                </p>

                <h2>"General Information"</h2>
                <p>
                    "Helium stores the information you enter so that it can show it back to you. It is not sold or shared with advertisers."
                </p>

                <h2>"Information Collection and Sharing"</h2>
                <p>
                    "We collect your username, email address and time zone when you register, and the planner data you add afterwards."
                </p>

                <p>
                    "If you have any questions regarding this Privacy Policy, "
                    <A href="/support">"contact us"</A>
                    "."
                </p>
            </div>
        </div>
    }
}
