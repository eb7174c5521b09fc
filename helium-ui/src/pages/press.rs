//! Press Page

use helium::routes::Scene;
use leptos::*;

use super::set_title;

#[component]
pub fn Press() -> impl IntoView {
    set_title(Scene::Press);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>"Press" <small>"news and resources"</small></h1>
                </div>

                <h2>"Logos and Images"</h2>
                <p>
                    "Logos and screenshots of Helium may be used in articles and reviews. For anything else, please get in touch first."
                </p>
                <p>
                    "Press inquiries: "
                    <a href="mailto:contact@heliumedu.com">"contact@heliumedu.com"</a>
                </p>
            </div>
        </div>
    }
}
