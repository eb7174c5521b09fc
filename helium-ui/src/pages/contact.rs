//! Contact Page

use helium::routes::Scene;
use leptos::*;
use leptos_router::*;

use super::set_title;

#[component]
pub fn Contact() -> impl IntoView {
    set_title(Scene::Contact);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>"Contact" <small>"get in touch"</small></h1>
                </div>

                <p>
                    "Found a bug or need a hand? "
                    <A href="/support">"Open a support ticket"</A>
                    " and we'll get back to you."
                </p>
                <p>
                    "Everything else: "
                    <a href="mailto:contact@heliumedu.com">"contact@heliumedu.com"</a>
                </p>
                <p>
                    <a href="https://www.facebook.com/heliumstudents" target="_blank" rel="noopener noreferrer">"Facebook"</a>
                    " · "
                    <a href="https://www.twitter.com/heliumstudents" target="_blank" rel="noopener noreferrer">"Twitter"</a>
                </p>
            </div>
        </div>
    }
}
