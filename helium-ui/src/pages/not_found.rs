//! Not Found Page

use helium::routes::Scene;
use leptos::*;
use leptos_router::*;

use super::set_title;

#[component]
pub fn NotFound() -> impl IntoView {
    set_title(Scene::NotFound);

    view! {
        <div class="main-container align-center">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">"Go Home"</A>
        </div>
    }
}
