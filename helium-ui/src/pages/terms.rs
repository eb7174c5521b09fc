//! Terms of Service Page

use helium::routes::Scene;
use leptos::*;
use leptos_router::*;

use super::set_title;

#[component]
pub fn Terms() -> impl IntoView {
    set_title(Scene::Terms);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>"Terms of Service"</h1>
                </div>

                <h2>"Acceptance of Terms"</h2>
                <p>
                    "By using Helium you agree to these terms. If you do not agree, do not use the service."
                </p>

                <h2>"Your Account"</h2>
                <p>
                    "You are responsible for keeping your password secret and for everything done with your account."
                </p>

                <h2>"Your Content"</h2>
                <p>
                    "The schedules, assignments and grades you enter remain yours. See the "
                    <A href="/privacy">"Privacy Policy"</A>
                    " for how they are handled."
                </p>

                <h2>"Changes"</h2>
                <p>"These terms may change; continued use means you accept the current version."</p>
            </div>
        </div>
    }
}
