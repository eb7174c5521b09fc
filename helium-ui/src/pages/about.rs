//! About Page

use helium::routes::Scene;
use leptos::*;

use super::set_title;

#[component]
pub fn About() -> impl IntoView {
    set_title(Scene::About);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="page-header">
                    <h1>"About" <small>"who we are"</small></h1>
                </div>

                <h2>"The Basics"</h2>
                <p>
                    "Short and simple: Helium allows you to ditch the physical planner and take control of your schoolwork."
                </p>
                <p>
                    "Those pesky grades that are so hard to monitor? We've got your back. Ever-changing due dates? No problem. A quick look at your progress through a semester? Just a click away."
                </p>

                <h2>"The Back Story"</h2>
                <p>
                    "Helium has its origins in Get Organized, an open source, cross-platform digital planner built by a student who found every existing tool limited and incomplete. Within a few weeks of its release it was being used by tens of thousands of students worldwide."
                </p>

                <h2>"The Now"</h2>
                <p>
                    "Helium is the natural evolution of Get Organized for the modern student, rebuilt from the ground up as an intuitive and modern set of websites and apps."
                </p>
                <p>
                    "For the most recent happenings, "
                    <a href="http://blog.heliumedu.com" target="_blank" rel="noopener noreferrer">"check out our blog"</a>
                    "."
                </p>
            </div>
        </div>
    }
}
