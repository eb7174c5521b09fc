//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Header, RequireAuth, Toast};
use crate::pages::{
    About, Calendar, Classes, Contact, Forgot, Grades, Home, Login, Logout, Materials, NotFound,
    Press, Privacy, Register, Settings, Support, Terms, Verify,
};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <Header />

            <main>
                <AppRoutes />
            </main>

            <Footer />
            <Toast />
        </Router>
    }
}

/// Scene table
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes>
            <Route path="/" view=Home />
            <Route path="/register" view=Register />
            <Route path="/verify" view=Verify />
            <Route path="/login" view=Login />
            <Route path="/logout" view=Logout />
            <Route path="/forgot" view=Forgot />
            <Route path="/support" view=Support />
            <Route path="/terms" view=Terms />
            <Route path="/privacy" view=Privacy />
            <Route path="/press" view=Press />
            <Route path="/about" view=About />
            <Route path="/contact" view=Contact />

            <Route path="/planner" view=Guarded>
                <Route path="" view=|| view! { <Redirect path="/planner/calendar" /> } />
                <Route path="calendar" view=Calendar />
                <Route path="classes" view=Classes />
                <Route path="materials" view=Materials />
                <Route path="grades" view=Grades />
                <Route path="*any" view=NotFound />
            </Route>

            <Route path="/settings" view=Guarded>
                <Route path="" view=Settings />
                <Route path="*any" view=NotFound />
            </Route>

            <Route path="/*any" view=NotFound />
        </Routes>
    }
}

/// Layout for routes behind the auth guard
#[component]
fn Guarded() -> impl IntoView {
    view! {
        <RequireAuth>
            <Outlet />
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::GlobalState;
    use crate::state::session;
    use helium::routes::Scene;
    use helium::store::authentication::CHANGE_AUTH;
    use helium::store::Action;
    use serde_json::json;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    /// Mount the scene table at `path` under the store provider, then hide
    /// it so the scene's owner is disposed
    fn mount_and_unmount(path: &str, signed_in: bool) {
        let window = web_sys::window().unwrap();
        window
            .history()
            .unwrap()
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            .unwrap();

        let document = window.document().unwrap();
        let parent = document.create_element("section").unwrap();
        document.body().unwrap().append_child(&parent).unwrap();

        let (shown, set_shown) = create_signal(true);
        mount_to(parent.clone().unchecked_into(), move || {
            provide_global_state();
            if signed_in {
                expect_context::<GlobalState>()
                    .dispatch(Action::success(CHANGE_AUTH, json!({ "token": "t" })));
            }

            view! {
                <Show when=move || shown.get()>
                    <Router>
                        <AppRoutes />
                    </Router>
                </Show>
            }
        });

        set_shown.set(false);
        assert_eq!(parent.child_element_count(), 0);
        parent.remove();
    }

    #[wasm_bindgen_test]
    fn every_public_scene_mounts_and_unmounts() {
        session::clear_tokens();
        for scene in Scene::ALL.into_iter().filter(|s| !s.requires_auth()) {
            let path = scene.path().unwrap_or("/no-such-page");
            mount_and_unmount(path, false);
        }
    }

    #[wasm_bindgen_test]
    fn every_planner_scene_mounts_and_unmounts() {
        session::clear_tokens();
        for scene in Scene::ALL.into_iter().filter(|s| s.requires_auth()) {
            mount_and_unmount(scene.path().unwrap(), true);
        }
        mount_and_unmount("/planner", true);
        mount_and_unmount("/planner/unknown", true);
    }

    #[wasm_bindgen_test]
    fn guarded_scenes_mount_when_signed_out() {
        session::clear_tokens();
        mount_and_unmount("/planner/grades", false);
        mount_and_unmount("/settings", false);
    }
}
