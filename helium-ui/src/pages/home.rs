//! Home Page

use helium::routes::Scene;
use leptos::*;
use leptos_router::*;

use super::set_title;

const FEATURES: [(&str, &str); 6] = [
    (
        "Coordinated Calendars",
        "Easily organize and color-coordinate your schedule and schoolwork, capture details about every assignment, and plan your study schedule.",
    ),
    (
        "Schedule at a Glance",
        "Categorize your assignments, set up grading scales, and enter details about teachers, room location, schedules, credits, and more!",
    ),
    (
        "Grade Analysis",
        "Constantly up-to-date details about your grades in every class, a breakdown of your progress, and insight into which classes you're acing and what could use improvement.",
    ),
    (
        "Assignment Details",
        "Enter due date and textbook details, add notes to remember later, set a priority level, and record grades when complete.",
    ),
    (
        "Materials Organizer",
        "Maintain a list and details of the supplies, books, technology, and equipment you'll need to pick up to be ready for class each semester and each day.",
    ),
    (
        "Filtered Lists",
        "Sort assignments by class, priority level, due date, materials needed, etc. for an easy way to structure your study time and plan your approach to mastering your courses.",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    set_title(Scene::Home);

    view! {
        <div class="main-container">
            <div class="container">
                <div class="align-center">
                    <h1>"Lightening Your Course Load"</h1>
                    <p class="lead">
                        "Ditch the physical planner and take control of your schoolwork."
                    </p>
                    <A href="/register" class="btn btn-primary">"Sign Me Up!"</A>
                </div>

                <div class="row features">
                    {FEATURES
                        .iter()
                        .map(|(heading, text)| view! {
                            <div class="col align-center">
                                <h2>{*heading}</h2>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
