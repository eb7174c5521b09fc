//! Pages
//!
//! Top-level scene components for each route.

pub mod about;
pub mod contact;
pub mod forgot;
pub mod home;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod planner;
pub mod press;
pub mod privacy;
pub mod register;
pub mod settings;
pub mod support;
pub mod terms;
pub mod verify;

pub use about::About;
pub use contact::Contact;
pub use forgot::Forgot;
pub use home::Home;
pub use login::Login;
pub use logout::Logout;
pub use not_found::NotFound;
pub use planner::{Calendar, Classes, Grades, Materials};
pub use press::Press;
pub use privacy::Privacy;
pub use register::Register;
pub use settings::Settings;
pub use support::Support;
pub use terms::Terms;
pub use verify::Verify;

use std::cell::Cell;
use std::rc::Rc;

use helium::flows::Navigation;
use helium::routes::Scene;
use leptos::on_cleanup;
use leptos_router::NavigateOptions;

/// Set the document title for a scene
pub(crate) fn set_title(scene: Scene) {
    leptos::document().set_title(&scene.document_title());
}

/// Follow a flow's navigation through the router
pub(crate) fn navigate_to(navigate: &impl Fn(&str, NavigateOptions), navigation: &Navigation) {
    navigate(
        navigation.path(),
        NavigateOptions {
            replace: navigation.is_replace(),
            ..Default::default()
        },
    );
}

/// Cleared when the scene that created it is torn down; background tasks
/// check it before touching the page.
#[derive(Clone)]
pub(crate) struct Mounted(Rc<Cell<bool>>);

impl Mounted {
    pub(crate) fn new() -> Self {
        let flag = Rc::new(Cell::new(true));
        let cleared = Rc::clone(&flag);
        on_cleanup(move || cleared.set(false));
        Self(flag)
    }

    pub(crate) fn get(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn mounted_clears_when_its_owner_is_disposed() {
        let (shown, set_shown) = create_signal(true);
        let seen = Rc::new(std::cell::RefCell::new(None::<Mounted>));
        let slot = Rc::clone(&seen);

        create_effect(move |_| {
            if shown.get() {
                *slot.borrow_mut() = Some(Mounted::new());
            }
        });

        let mounted = seen.borrow().clone().unwrap();
        assert!(mounted.get());
        set_shown.set(false);
        assert!(!mounted.get());
    }
}
